//! Application layer
//!
//! Orchestrates use cases and coordinates domain objects.

pub mod commands;
pub mod dto;

pub use commands::{
    AutomationService, DashboardService, OfferService, OpportunityService, ProfileService,
};
pub use dto::*;
