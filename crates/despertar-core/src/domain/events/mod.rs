//! Domain Events
//!
//! Events raised by aggregates to communicate state changes.

use chrono::{DateTime, Utc};

use crate::domain::aggregates::automation::AutomationKind;
use crate::domain::aggregates::offer::ServiceCategory;
use crate::domain::value_objects::{Channel, RecordId};

/// All domain events in the studio bounded context
#[derive(Clone, Debug, PartialEq)]
pub enum DomainEvent {
    Automation(AutomationEvent),
    Opportunity(OpportunityEvent),
    Offer(OfferEvent),
    Profile(ProfileEvent),
}

/// Automation-related domain events
#[derive(Clone, Debug, PartialEq)]
pub enum AutomationEvent {
    Created {
        automation_id: RecordId,
        name: String,
        kind: AutomationKind,
        channel: Channel,
        created_at: DateTime<Utc>,
    },

    StatusChanged {
        automation_id: RecordId,
        is_active: bool,
        changed_at: DateTime<Utc>,
    },

    Triggered {
        automation_id: RecordId,
        trigger_count: u64,
        triggered_at: DateTime<Utc>,
    },
}

/// Opportunity-related domain events
#[derive(Clone, Debug, PartialEq)]
pub enum OpportunityEvent {
    Discovered {
        opportunity_id: RecordId,
        title: String,
        channel: Channel,
        created_at: DateTime<Utc>,
    },
}

/// Offer-related domain events
#[derive(Clone, Debug, PartialEq)]
pub enum OfferEvent {
    Generated {
        offer_id: RecordId,
        category: ServiceCategory,
        niche: String,
        estimated_value: rust_decimal::Decimal,
        created_at: DateTime<Utc>,
    },
}

/// Profile-related domain events
#[derive(Clone, Debug, PartialEq)]
pub enum ProfileEvent {
    Created {
        name: String,
        created_at: DateTime<Utc>,
    },
}

impl DomainEvent {
    /// Get the aggregate ID this event belongs to, if the aggregate has one
    pub fn aggregate_id(&self) -> Option<&RecordId> {
        match self {
            DomainEvent::Automation(e) => match e {
                AutomationEvent::Created { automation_id, .. } => Some(automation_id),
                AutomationEvent::StatusChanged { automation_id, .. } => Some(automation_id),
                AutomationEvent::Triggered { automation_id, .. } => Some(automation_id),
            },
            DomainEvent::Opportunity(e) => match e {
                OpportunityEvent::Discovered { opportunity_id, .. } => Some(opportunity_id),
            },
            DomainEvent::Offer(e) => match e {
                OfferEvent::Generated { offer_id, .. } => Some(offer_id),
            },
            DomainEvent::Profile(_) => None,
        }
    }

    /// Get event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            DomainEvent::Automation(e) => match e {
                AutomationEvent::Created { .. } => "automation.created",
                AutomationEvent::StatusChanged { .. } => "automation.status_changed",
                AutomationEvent::Triggered { .. } => "automation.triggered",
            },
            DomainEvent::Opportunity(e) => match e {
                OpportunityEvent::Discovered { .. } => "opportunity.discovered",
            },
            DomainEvent::Offer(e) => match e {
                OfferEvent::Generated { .. } => "offer.generated",
            },
            DomainEvent::Profile(e) => match e {
                ProfileEvent::Created { .. } => "profile.created",
            },
        }
    }
}
