//! Outbound ports (Store traits)
//!
//! Hexagonal architecture: these are the interfaces that infrastructure must implement.

use thiserror::Error;

use crate::domain::aggregates::{Automation, Offer, Opportunity, Profile};
use crate::domain::events::DomainEvent;

/// Automation store port
pub trait AutomationStore: Send + Sync {
    /// Load the full stored list; an absent blob is an empty list
    fn load(&self) -> Result<Vec<Automation>, StoreError>;

    /// Replace the stored list wholesale
    fn save(&self, automations: &[Automation]) -> Result<(), StoreError>;
}

/// Opportunity store port
pub trait OpportunityStore: Send + Sync {
    /// Load the full stored list; an absent blob is an empty list
    fn load(&self) -> Result<Vec<Opportunity>, StoreError>;

    /// Replace the stored list wholesale
    fn save(&self, opportunities: &[Opportunity]) -> Result<(), StoreError>;
}

/// Offer store port
pub trait OfferStore: Send + Sync {
    /// Load the full stored list; an absent blob is an empty list
    fn load(&self) -> Result<Vec<Offer>, StoreError>;

    /// Replace the stored list wholesale
    fn save(&self, offers: &[Offer]) -> Result<(), StoreError>;
}

/// Profile store port (singleton record)
pub trait ProfileStore: Send + Sync {
    /// Load the stored profile, if one exists
    fn load(&self) -> Result<Option<Profile>, StoreError>;

    /// Replace the stored profile
    fn save(&self, profile: &Profile) -> Result<(), StoreError>;
}

/// Event publisher port
pub trait EventPublisher: Send + Sync {
    /// Publish domain events
    fn publish(&self, events: Vec<DomainEvent>) -> Result<(), StoreError>;
}

/// Errors surfaced by storage adapters
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the blob failed
    #[error("io failure for key '{key}'")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The list could not be encoded
    #[error("data for key '{key}' could not be encoded")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The stored blob exists but does not parse; nothing is overwritten
    /// until the user resolves it
    #[error("stored data for key '{key}' is malformed")]
    Deserialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Storage key the failure relates to
    pub fn key(&self) -> &str {
        match self {
            Self::Io { key, .. } => key,
            Self::Serialization { key, .. } => key,
            Self::Deserialization { key, .. } => key,
        }
    }
}
