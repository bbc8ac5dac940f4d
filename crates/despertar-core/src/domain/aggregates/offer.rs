//! Offer Aggregate
//!
//! Immutable record of a generated service offer: one piece of template
//! content sold as a service, priced by its category.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::events::{DomainEvent, OfferEvent};
use crate::domain::value_objects::{Money, RecordId};

/// Offer aggregate root
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    id: RecordId,
    #[serde(rename = "type")]
    category: ServiceCategory,
    title: String,
    content: String,
    niche: String,
    estimated_value: Money,
    created_at: DateTime<Utc>,
    #[serde(skip)]
    events: Vec<DomainEvent>,
}

impl Offer {
    /// Create a new offer
    ///
    /// Title and estimated value are derived from the category; the content
    /// comes in ready (rendered or hand-edited upstream).
    pub fn create(
        category: ServiceCategory,
        niche: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        let id = RecordId::new();
        let niche = niche.into();
        let estimated_value = category.estimated_value();

        let mut offer = Self {
            id: id.clone(),
            category,
            title: format!("{} - {}", category.label(), niche),
            content: content.into(),
            niche: niche.clone(),
            estimated_value: estimated_value.clone(),
            created_at: now,
            events: vec![],
        };

        offer.raise_event(DomainEvent::Offer(OfferEvent::Generated {
            offer_id: id,
            category,
            niche,
            estimated_value: estimated_value.amount(),
            created_at: now,
        }));

        offer
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn id(&self) -> &RecordId { &self.id }
    pub fn category(&self) -> ServiceCategory { self.category }
    pub fn title(&self) -> &str { &self.title }
    pub fn content(&self) -> &str { &self.content }
    pub fn niche(&self) -> &str { &self.niche }
    pub fn estimated_value(&self) -> &Money { &self.estimated_value }
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

/// Content category an offer is generated from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    Ad,
    SalesPage,
    Bio,
    Story,
    Message,
}

impl ServiceCategory {
    pub fn all() -> [ServiceCategory; 5] {
        [Self::Ad, Self::SalesPage, Self::Bio, Self::Story, Self::Message]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ad => "ad",
            Self::SalesPage => "sales-page",
            Self::Bio => "bio",
            Self::Story => "story",
            Self::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ad => "Texto de Anúncio",
            Self::SalesPage => "Página de Vendas",
            Self::Bio => "Bio de Instagram",
            Self::Story => "Story de Vendas",
            Self::Message => "Mensagem WhatsApp",
        }
    }

    /// Fixed market price per category, in BRL
    pub fn estimated_value(&self) -> Money {
        let amount = match self {
            Self::Ad => 50,
            Self::SalesPage => 200,
            Self::Bio => 30,
            Self::Story => 80,
            Self::Message => 40,
        };
        Money::brl(Decimal::from(amount))
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "ad" => Some(Self::Ad),
            "sales-page" => Some(Self::SalesPage),
            "bio" => Some(Self::Bio),
            "story" => Some(Self::Story),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_offer() -> Offer {
        Offer::create(
            ServiceCategory::Bio,
            "Fitness e Saúde",
            "✨ Especialista em Fitness e Saúde",
        )
    }

    #[test]
    fn test_offer_creation() {
        let offer = create_test_offer();
        assert_eq!(offer.title(), "Bio de Instagram - Fitness e Saúde");
        assert_eq!(offer.niche(), "Fitness e Saúde");
        assert_eq!(offer.category(), ServiceCategory::Bio);
    }

    #[test]
    fn test_bio_offer_worth_thirty() {
        let offer = create_test_offer();
        assert_eq!(offer.estimated_value().amount(), Decimal::from(30));
    }

    #[test]
    fn test_category_values() {
        assert_eq!(ServiceCategory::Ad.estimated_value().amount(), Decimal::from(50));
        assert_eq!(ServiceCategory::SalesPage.estimated_value().amount(), Decimal::from(200));
        assert_eq!(ServiceCategory::Story.estimated_value().amount(), Decimal::from(80));
        assert_eq!(ServiceCategory::Message.estimated_value().amount(), Decimal::from(40));
    }

    #[test]
    fn test_wire_field_names() {
        let offer = Offer::create(ServiceCategory::SalesPage, "E-commerce", "conteúdo");
        let value = serde_json::to_value(&offer).unwrap();

        assert_eq!(value["type"], "sales-page");
        assert_eq!(value["title"], "Página de Vendas - E-commerce");
        assert_eq!(value["estimatedValue"]["currency"], "BRL");
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(ServiceCategory::parse("sales-page"), Some(ServiceCategory::SalesPage));
        assert_eq!(ServiceCategory::parse("BIO"), Some(ServiceCategory::Bio));
        assert_eq!(ServiceCategory::parse("banner"), None);
    }
}
