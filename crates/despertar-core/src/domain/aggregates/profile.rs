//! Profile Aggregate
//!
//! Singleton user profile. Level and earnings are stored as of creation;
//! live progress is computed from the record lists, not written back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::events::{DomainEvent, ProfileEvent};
use crate::domain::value_objects::{Currency, Money};

/// User profile
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    name: String,
    created_at: DateTime<Utc>,
    level: u32,
    earnings: Money,
    #[serde(skip)]
    events: Vec<DomainEvent>,
}

impl Profile {
    /// Create a fresh profile at level 1 with zero earnings
    pub fn create(name: impl Into<String>) -> Self {
        let now = Utc::now();
        let name = name.into();

        let mut profile = Self {
            name: name.clone(),
            created_at: now,
            level: 1,
            earnings: Money::zero(Currency::BRL),
            events: vec![],
        };

        profile.raise_event(DomainEvent::Profile(ProfileEvent::Created {
            name,
            created_at: now,
        }));

        profile
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn level(&self) -> u32 { self.level }
    pub fn earnings(&self) -> &Money { &self.earnings }

    pub fn take_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }

    fn raise_event(&mut self, event: DomainEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_creation() {
        let profile = Profile::create("Maria");
        assert_eq!(profile.name(), "Maria");
        assert_eq!(profile.level(), 1);
        assert!(profile.earnings().is_zero());
    }

    #[test]
    fn test_wire_field_names() {
        let profile = Profile::create("João");
        let value = serde_json::to_value(&profile).unwrap();

        assert_eq!(value["name"], "João");
        assert_eq!(value["level"], 1);
        assert_eq!(value["earnings"]["currency"], "BRL");
        assert!(value["createdAt"].is_string());
    }
}
