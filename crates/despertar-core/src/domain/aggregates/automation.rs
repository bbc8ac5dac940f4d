//! Automation Aggregate
//!
//! Rich aggregate root for simulated messaging automations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::events::{AutomationEvent, DomainEvent};
use crate::domain::value_objects::{Channel, RecordId};

/// Automation aggregate root
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Automation {
    id: RecordId,
    name: String,
    #[serde(rename = "type")]
    kind: AutomationKind,
    #[serde(rename = "platform")]
    channel: Channel,
    message: String,
    #[serde(rename = "delay")]
    delay_minutes: u32,
    is_active: bool,
    trigger_count: u64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(skip)]
    events: Vec<DomainEvent>,
}

impl Automation {
    /// Create a new automation, active with a zeroed trigger count
    pub fn create(
        name: impl Into<String>,
        kind: AutomationKind,
        channel: Channel,
        message: impl Into<String>,
        delay_minutes: u32,
    ) -> Self {
        let now = Utc::now();
        let id = RecordId::new();
        let name = name.into();

        let mut automation = Self {
            id: id.clone(),
            name: name.clone(),
            kind,
            channel,
            message: message.into(),
            delay_minutes,
            is_active: true,
            trigger_count: 0,
            created_at: now,
            updated_at: now,
            events: vec![],
        };

        automation.raise_event(DomainEvent::Automation(AutomationEvent::Created {
            automation_id: id,
            name,
            kind,
            channel,
            created_at: now,
        }));

        automation
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn id(&self) -> &RecordId { &self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn kind(&self) -> AutomationKind { self.kind }
    pub fn channel(&self) -> Channel { self.channel }
    pub fn message(&self) -> &str { &self.message }
    pub fn delay_minutes(&self) -> u32 { self.delay_minutes }
    pub fn is_active(&self) -> bool { self.is_active }
    pub fn trigger_count(&self) -> u64 { self.trigger_count }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }

    // =========================================================================
    // Business Operations
    // =========================================================================

    /// Flip the active flag
    pub fn toggle_active(&mut self) {
        let now = Utc::now();

        self.is_active = !self.is_active;
        self.touch();

        self.raise_event(DomainEvent::Automation(AutomationEvent::StatusChanged {
            automation_id: self.id.clone(),
            is_active: self.is_active,
            changed_at: now,
        }));
    }

    /// Record one simulated trigger
    ///
    /// Only an active automation may fire; the count never moves while paused.
    pub fn record_trigger(&mut self) -> Result<(), AutomationError> {
        if !self.is_active {
            return Err(AutomationError::Inactive);
        }

        let now = Utc::now();

        self.trigger_count += 1;
        self.touch();

        self.raise_event(DomainEvent::Automation(AutomationEvent::Triggered {
            automation_id: self.id.clone(),
            trigger_count: self.trigger_count,
            triggered_at: now,
        }));

        Ok(())
    }

    // =========================================================================
    // Private
    // =========================================================================

    pub fn take_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }

    fn raise_event(&mut self, event: DomainEvent) {
        self.events.push(event);
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

// =============================================================================
// Supporting Types
// =============================================================================

/// Automation kind, one per default message template
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutomationKind {
    Welcome,
    FollowUp,
    Delivery,
    Reminder,
}

impl AutomationKind {
    pub fn all() -> [AutomationKind; 4] {
        [Self::Welcome, Self::FollowUp, Self::Delivery, Self::Reminder]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::FollowUp => "follow-up",
            Self::Delivery => "delivery",
            Self::Reminder => "reminder",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Welcome => "Mensagem de Boas-vindas",
            Self::FollowUp => "Follow-up de Vendas",
            Self::Delivery => "Entrega de Produto",
            Self::Reminder => "Lembrete de Pagamento",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "welcome" => Some(Self::Welcome),
            "follow-up" => Some(Self::FollowUp),
            "delivery" => Some(Self::Delivery),
            "reminder" => Some(Self::Reminder),
            _ => None,
        }
    }
}

impl std::fmt::Display for AutomationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutomationError {
    Inactive,
}

impl std::error::Error for AutomationError {}

impl std::fmt::Display for AutomationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inactive => write!(f, "Automation is paused"),
        }
    }
}
