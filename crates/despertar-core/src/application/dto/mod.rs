//! Data Transfer Objects (DTOs)
//!
//! Objects for transferring data across boundaries. Commands carry raw user
//! input; enum-valued fields arrive as strings and are parsed at the service
//! boundary.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Money;

// =============================================================================
// Automation Commands
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateAutomationCommand {
    pub name: String,
    pub kind: String,
    pub channel: String,
    /// Prefilled from the kind's default template when absent
    pub message: Option<String>,
    pub delay_minutes: u32,
}

// =============================================================================
// Opportunity Commands
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateOpportunityCommand {
    pub title: String,
    pub channel: String,
    pub niche: String,
    pub difficulty: String,
    /// Whole BRL amount, must be positive
    pub estimated_revenue: i64,
    pub description: String,
    pub tips: Vec<String>,
}

// =============================================================================
// Offer Commands
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateOfferCommand {
    pub category: String,
    pub niche: String,
    /// Hand-edited content; the template rendering is used when absent
    pub content: Option<String>,
}

// =============================================================================
// Views (Read Models)
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashboardView {
    pub user_name: Option<String>,
    pub level: u32,
    pub experience_into_level: u32,
    pub experience_to_next_level: u32,
    pub total_offers: usize,
    pub total_opportunities: usize,
    pub total_automations: usize,
    pub active_automations: usize,
    pub total_triggers: u64,
    pub estimated_earnings: Money,
}
