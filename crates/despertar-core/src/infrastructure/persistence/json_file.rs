//! JSON file storage
//!
//! One pretty-printed JSON blob per storage key under a data directory.
//! Absent files read as empty state; a present but malformed blob is
//! surfaced and never overwritten behind the user's back.

use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::domain::aggregates::{Automation, Offer, Opportunity, Profile};
use crate::ports::outbound::{
    AutomationStore, OfferStore, OpportunityStore, ProfileStore, StoreError,
};

/// Prefix shared by every storage file
pub const STORAGE_PREFIX: &str = "despertar";

/// File-backed store for one storage key
pub struct JsonFileStore<T> {
    path: PathBuf,
    key: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    /// Open the store for one record kind under `dir`, creating the
    /// directory if needed
    pub fn open(dir: &Path, kind: &str) -> Result<Self, StoreError> {
        let key = format!("{}_{}", STORAGE_PREFIX, kind);

        fs::create_dir_all(dir).map_err(|source| StoreError::Io {
            key: key.clone(),
            source,
        })?;

        Ok(Self {
            path: dir.join(format!("{}.json", key)),
            key,
            _marker: PhantomData,
        })
    }

    /// Storage key this store persists under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: Serialize + DeserializeOwned> JsonFileStore<T> {
    fn read_raw(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(key = %self.key, "no stored blob");
                Ok(None)
            }
            Err(source) => Err(StoreError::Io {
                key: self.key.clone(),
                source,
            }),
        }
    }

    fn write_raw(&self, raw: String) -> Result<(), StoreError> {
        fs::write(&self.path, raw).map_err(|source| StoreError::Io {
            key: self.key.clone(),
            source,
        })
    }

    fn read_list(&self) -> Result<Vec<T>, StoreError> {
        let Some(raw) = self.read_raw()? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw).map_err(|source| StoreError::Deserialization {
            key: self.key.clone(),
            source,
        })
    }

    fn write_list(&self, records: &[T]) -> Result<(), StoreError> {
        let raw =
            serde_json::to_string_pretty(records).map_err(|source| StoreError::Serialization {
                key: self.key.clone(),
                source,
            })?;

        self.write_raw(raw)?;
        debug!(key = %self.key, count = records.len(), "blob written");
        Ok(())
    }

    fn read_record(&self) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.read_raw()? else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Deserialization {
                key: self.key.clone(),
                source,
            })
    }

    fn write_record(&self, record: &T) -> Result<(), StoreError> {
        let raw =
            serde_json::to_string_pretty(record).map_err(|source| StoreError::Serialization {
                key: self.key.clone(),
                source,
            })?;

        self.write_raw(raw)?;
        debug!(key = %self.key, "blob written");
        Ok(())
    }
}

impl AutomationStore for JsonFileStore<Automation> {
    fn load(&self) -> Result<Vec<Automation>, StoreError> {
        self.read_list()
    }

    fn save(&self, automations: &[Automation]) -> Result<(), StoreError> {
        self.write_list(automations)
    }
}

impl OpportunityStore for JsonFileStore<Opportunity> {
    fn load(&self) -> Result<Vec<Opportunity>, StoreError> {
        self.read_list()
    }

    fn save(&self, opportunities: &[Opportunity]) -> Result<(), StoreError> {
        self.write_list(opportunities)
    }
}

impl OfferStore for JsonFileStore<Offer> {
    fn load(&self) -> Result<Vec<Offer>, StoreError> {
        self.read_list()
    }

    fn save(&self, offers: &[Offer]) -> Result<(), StoreError> {
        self.write_list(offers)
    }
}

impl ProfileStore for JsonFileStore<Profile> {
    fn load(&self) -> Result<Option<Profile>, StoreError> {
        self.read_record()
    }

    fn save(&self, profile: &Profile) -> Result<(), StoreError> {
        self.write_record(profile)
    }
}

/// Open the automation store under `dir`
pub fn automation_store(dir: &Path) -> Result<JsonFileStore<Automation>, StoreError> {
    JsonFileStore::open(dir, "automations")
}

/// Open the opportunity store under `dir`
pub fn opportunity_store(dir: &Path) -> Result<JsonFileStore<Opportunity>, StoreError> {
    JsonFileStore::open(dir, "opportunities")
}

/// Open the offer store under `dir` (stored under the user-facing
/// "services" key)
pub fn offer_store(dir: &Path) -> Result<JsonFileStore<Offer>, StoreError> {
    JsonFileStore::open(dir, "services")
}

/// Open the profile store under `dir`
pub fn profile_store(dir: &Path) -> Result<JsonFileStore<Profile>, StoreError> {
    JsonFileStore::open(dir, "user")
}
