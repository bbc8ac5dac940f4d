//! Opportunity Aggregate
//!
//! Immutable record of an identified income opportunity. Opportunities are
//! created and deleted, never edited.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::events::{DomainEvent, OpportunityEvent};
use crate::domain::value_objects::{Channel, Money, RecordId};

/// Opportunity aggregate root
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    id: RecordId,
    title: String,
    #[serde(rename = "platform")]
    channel: Channel,
    niche: String,
    difficulty: Difficulty,
    estimated_revenue: Money,
    description: String,
    tips: Vec<String>,
    created_at: DateTime<Utc>,
    #[serde(skip)]
    events: Vec<DomainEvent>,
}

impl Opportunity {
    /// Create a new opportunity
    pub fn create(
        title: impl Into<String>,
        channel: Channel,
        niche: impl Into<String>,
        difficulty: Difficulty,
        estimated_revenue: Money,
        description: impl Into<String>,
        tips: Vec<String>,
    ) -> Self {
        let now = Utc::now();
        let id = RecordId::new();
        let title = title.into();

        let mut opportunity = Self {
            id: id.clone(),
            title: title.clone(),
            channel,
            niche: niche.into(),
            difficulty,
            estimated_revenue,
            description: description.into(),
            tips,
            created_at: now,
            events: vec![],
        };

        opportunity.raise_event(DomainEvent::Opportunity(OpportunityEvent::Discovered {
            opportunity_id: id,
            title,
            channel,
            created_at: now,
        }));

        opportunity
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn id(&self) -> &RecordId { &self.id }
    pub fn title(&self) -> &str { &self.title }
    pub fn channel(&self) -> Channel { self.channel }
    pub fn niche(&self) -> &str { &self.niche }
    pub fn difficulty(&self) -> Difficulty { self.difficulty }
    pub fn estimated_revenue(&self) -> &Money { &self.estimated_revenue }
    pub fn description(&self) -> &str { &self.description }
    pub fn tips(&self) -> &[String] { &self.tips }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }

    pub fn take_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }

    fn raise_event(&mut self, event: DomainEvent) {
        self.events.push(event);
    }
}

// =============================================================================
// Supporting Types
// =============================================================================

/// Opportunity difficulty grade
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Fácil",
            Self::Medium => "Médio",
            Self::Hard => "Avançado",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn create_test_opportunity() -> Opportunity {
        Opportunity::create(
            "Criação de Bio Profissional",
            Channel::Instagram,
            "Personal Branding",
            Difficulty::Easy,
            Money::brl(Decimal::from(50)),
            "Muitos profissionais precisam de bios otimizadas.",
            vec![
                "Use palavras-chave do nicho".to_string(),
                "Inclua call-to-action claro".to_string(),
            ],
        )
    }

    #[test]
    fn test_opportunity_creation() {
        let opportunity = create_test_opportunity();
        assert_eq!(opportunity.title(), "Criação de Bio Profissional");
        assert_eq!(opportunity.channel(), Channel::Instagram);
        assert_eq!(opportunity.difficulty(), Difficulty::Easy);
        assert_eq!(opportunity.estimated_revenue().amount(), Decimal::from(50));
        assert_eq!(opportunity.tips().len(), 2);
    }

    #[test]
    fn test_wire_field_names() {
        let opportunity = create_test_opportunity();
        let value = serde_json::to_value(&opportunity).unwrap();

        assert_eq!(value["platform"], "instagram");
        assert_eq!(value["difficulty"], "easy");
        assert_eq!(value["estimatedRevenue"]["currency"], "BRL");
        assert!(value["createdAt"].is_string());
    }

    #[test]
    fn test_difficulty_parse_and_labels() {
        assert_eq!(Difficulty::parse("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse("unknown"), None);
        assert_eq!(Difficulty::Medium.label(), "Médio");
        assert_eq!(Difficulty::Hard.label(), "Avançado");
    }
}
