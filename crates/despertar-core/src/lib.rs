//! Despertar Digital core library
//!
//! Business assistant for digital entrepreneurs, following Domain-Driven
//! Design (DDD) and Hexagonal Architecture principles.
//!
//! ## Architecture
//!
//! - **Domain Layer**: Rich aggregates, value objects, domain events
//! - **Application Layer**: Use case orchestration, DTOs
//! - **Ports Layer**: Hexagonal architecture interfaces
//! - **Infrastructure Layer**: Concrete implementations
//!
//! ## Key Aggregates
//!
//! - **Automation**: Message automation with triggers and pause/resume
//! - **Opportunity**: Business opportunity discovered for a niche
//! - **Offer**: Generated digital service with ready-to-use content
//! - **Profile**: The entrepreneur using the assistant
//!
//! ## Features
//!
//! - Automated WhatsApp/Instagram message flows
//! - Opportunity discovery from a curated catalog
//! - Template-based content generation per service category
//! - Level and earnings progression derived from activity
//! - Domain events for integration

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports for convenience
pub use application::{
    AutomationService, DashboardService, DashboardView, OfferService, OpportunityService,
    ProfileService,
};
pub use domain::aggregates::{
    Automation, AutomationKind, Difficulty, Offer, Opportunity, Profile, ServiceCategory,
};
pub use domain::events::{
    AutomationEvent, DomainEvent, OfferEvent, OpportunityEvent, ProfileEvent,
};
pub use domain::services::{ContentTemplateService, OpportunityCatalog, ProgressService};
pub use domain::value_objects::{Channel, Currency, Money, RecordId};
pub use ports::inbound::{
    AutomationUseCases, OfferUseCases, OpportunityUseCases, ProfileUseCases, UseCaseError,
};
pub use ports::outbound::{
    AutomationStore, EventPublisher, OfferStore, OpportunityStore, ProfileStore, StoreError,
};
