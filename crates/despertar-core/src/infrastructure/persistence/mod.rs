//! Persistence adapters
//!
//! JSON file stores for real use, in-memory fakes for tests.

pub mod json_file;

pub use json_file::{
    automation_store, offer_store, opportunity_store, profile_store, JsonFileStore,
    STORAGE_PREFIX,
};

use std::sync::RwLock;

use tracing::debug;

use crate::domain::aggregates::{Automation, Offer, Opportunity, Profile};
use crate::domain::events::DomainEvent;
use crate::ports::outbound::{
    AutomationStore, EventPublisher, OfferStore, OpportunityStore, ProfileStore, StoreError,
};

/// In-memory record store (for testing)
pub struct InMemoryStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T> InMemoryStore<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Clone> InMemoryStore<T> {
    fn snapshot(&self) -> Vec<T> {
        self.records.read().unwrap().clone()
    }

    fn replace(&self, records: &[T]) {
        *self.records.write().unwrap() = records.to_vec();
    }
}

impl AutomationStore for InMemoryStore<Automation> {
    fn load(&self) -> Result<Vec<Automation>, StoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, automations: &[Automation]) -> Result<(), StoreError> {
        self.replace(automations);
        Ok(())
    }
}

impl OpportunityStore for InMemoryStore<Opportunity> {
    fn load(&self) -> Result<Vec<Opportunity>, StoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, opportunities: &[Opportunity]) -> Result<(), StoreError> {
        self.replace(opportunities);
        Ok(())
    }
}

impl OfferStore for InMemoryStore<Offer> {
    fn load(&self) -> Result<Vec<Offer>, StoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, offers: &[Offer]) -> Result<(), StoreError> {
        self.replace(offers);
        Ok(())
    }
}

/// In-memory profile store (for testing)
#[derive(Default)]
pub struct InMemoryProfileStore {
    profile: RwLock<Option<Profile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn load(&self) -> Result<Option<Profile>, StoreError> {
        Ok(self.profile.read().unwrap().clone())
    }

    fn save(&self, profile: &Profile) -> Result<(), StoreError> {
        *self.profile.write().unwrap() = Some(profile.clone());
        Ok(())
    }
}

/// Event publisher that drops all events (for testing)
pub struct NoOpEventPublisher;

impl EventPublisher for NoOpEventPublisher {
    fn publish(&self, _events: Vec<DomainEvent>) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Event publisher that logs every event through tracing
pub struct TracingEventPublisher;

impl EventPublisher for TracingEventPublisher {
    fn publish(&self, events: Vec<DomainEvent>) -> Result<(), StoreError> {
        for event in events {
            match event.aggregate_id() {
                Some(id) => debug!(event = event.event_type(), id = %id, "domain event"),
                None => debug!(event = event.event_type(), "domain event"),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::AutomationKind;
    use crate::domain::value_objects::Channel;

    #[test]
    fn test_store_save_and_load() {
        let store: InMemoryStore<Automation> = InMemoryStore::new();

        let mut automation = Automation::create(
            "Boas-vindas",
            AutomationKind::Welcome,
            Channel::Whatsapp,
            "Olá!",
            0,
        );
        automation.take_events();

        store.save(&[automation.clone()]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, vec![automation]);
    }

    #[test]
    fn test_store_save_replaces_contents() {
        let store: InMemoryStore<Automation> = InMemoryStore::new();

        let automation = Automation::create(
            "Primeira",
            AutomationKind::Welcome,
            Channel::Whatsapp,
            "Olá!",
            0,
        );
        store.save(&[automation]).unwrap();
        store.save(&[]).unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_profile_store_starts_empty() {
        let store = InMemoryProfileStore::new();
        assert!(store.load().unwrap().is_none());

        let mut profile = Profile::create("Maria");
        profile.take_events();
        store.save(&profile).unwrap();

        assert_eq!(store.load().unwrap(), Some(profile));
    }
}
