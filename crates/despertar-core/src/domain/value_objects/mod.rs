//! Value Objects module
//!
//! Immutable, validated domain primitives.

pub mod money;

pub use money::{Currency, Money, MoneyError};

use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Identifier value object for records
///
/// Wall-clock milliseconds at creation time, bumped past the previously
/// issued value when the clock has not advanced. Ids are unique and strictly
/// increasing within a process.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RecordId(String);

impl RecordId {
    pub fn new() -> Self {
        let mut prev = LAST_ID.load(Ordering::Relaxed);
        loop {
            let candidate = chrono::Utc::now().timestamp_millis().max(prev + 1);
            match LAST_ID.compare_exchange_weak(prev, candidate, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return Self(candidate.to_string()),
                Err(current) => prev = current,
            }
        }
    }

    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Messaging channel a record targets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Whatsapp,
    Instagram,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Whatsapp => "whatsapp",
            Self::Instagram => "instagram",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Whatsapp => "WhatsApp",
            Self::Instagram => "Instagram",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "whatsapp" => Some(Self::Whatsapp),
            "instagram" => Some(Self::Instagram),
            _ => None,
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_ids_strictly_increase() {
        let ids: Vec<i64> = (0..100)
            .map(|_| RecordId::new().as_str().parse().unwrap())
            .collect();

        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_record_id_from_string() {
        let id = RecordId::from_string("1700000000000");
        assert_eq!(id.as_str(), "1700000000000");
        assert_eq!(id.to_string(), "1700000000000");
    }

    #[test]
    fn test_channel_parse() {
        assert_eq!(Channel::parse("whatsapp"), Some(Channel::Whatsapp));
        assert_eq!(Channel::parse(" Instagram "), Some(Channel::Instagram));
        assert_eq!(Channel::parse("telegram"), None);
    }

    #[test]
    fn test_channel_labels() {
        assert_eq!(Channel::Whatsapp.label(), "WhatsApp");
        assert_eq!(Channel::Instagram.as_str(), "instagram");
    }
}
