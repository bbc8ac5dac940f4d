//! Inbound ports (Use case traits)
//!
//! Hexagonal architecture: application service interfaces. Mutators take
//! `&mut self`; every successful mutation has already been persisted by the
//! time it returns.

use thiserror::Error;

use crate::application::dto::*;
use crate::domain::aggregates::{Automation, Offer, Opportunity, Profile};
use crate::domain::value_objects::RecordId;
use crate::ports::outbound::StoreError;

/// Automation management use cases
pub trait AutomationUseCases: Send + Sync {
    /// Create a new automation
    fn create_automation(&mut self, command: CreateAutomationCommand) -> Result<Automation, UseCaseError>;

    /// Flip an automation's active flag
    fn toggle_automation(&mut self, id: &RecordId) -> Result<Automation, UseCaseError>;

    /// Simulate one trigger of an active automation
    fn trigger_automation(&mut self, id: &RecordId) -> Result<Automation, UseCaseError>;

    /// Delete an automation
    fn remove_automation(&mut self, id: &RecordId) -> Result<(), UseCaseError>;

    /// Current list, newest first
    fn list_automations(&self) -> &[Automation];
}

/// Opportunity management use cases
pub trait OpportunityUseCases: Send + Sync {
    /// Draw a blueprint from the catalog and record it
    fn discover_opportunity(&mut self) -> Result<Opportunity, UseCaseError>;

    /// Record an opportunity from caller-supplied fields
    fn create_opportunity(&mut self, command: CreateOpportunityCommand) -> Result<Opportunity, UseCaseError>;

    /// Delete an opportunity
    fn remove_opportunity(&mut self, id: &RecordId) -> Result<(), UseCaseError>;

    /// Current list, newest first
    fn list_opportunities(&self) -> &[Opportunity];
}

/// Offer management use cases
pub trait OfferUseCases: Send + Sync {
    /// Render template content without persisting anything
    fn generate_content(&self, category: &str, niche: &str) -> Result<String, UseCaseError>;

    /// Create a new offer, rendering content when none is supplied
    fn create_offer(&mut self, command: GenerateOfferCommand) -> Result<Offer, UseCaseError>;

    /// Delete an offer
    fn remove_offer(&mut self, id: &RecordId) -> Result<(), UseCaseError>;

    /// Current list, newest first
    fn list_offers(&self) -> &[Offer];
}

/// Profile use cases
pub trait ProfileUseCases: Send + Sync {
    /// Create the profile, replacing any existing one
    fn create_profile(&mut self, name: &str) -> Result<Profile, UseCaseError>;

    /// The stored profile, if any
    fn get_profile(&self) -> Option<&Profile>;
}

/// Errors surfaced to drivers of the use-case traits
#[derive(Error, Debug)]
pub enum UseCaseError {
    /// No record with the given id
    #[error("not found: {0}")]
    NotFound(String),

    /// Required input missing or unparseable; nothing was changed
    #[error("validation error: {0}")]
    ValidationError(String),

    /// An aggregate rejected the state transition
    #[error("domain error: {0}")]
    DomainError(String),

    /// The storage adapter failed
    #[error("storage error: {0}")]
    StorageError(#[from] StoreError),
}
