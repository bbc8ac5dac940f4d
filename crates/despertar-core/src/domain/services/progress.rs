//! Progress Service
//!
//! Gamified progress arithmetic over the record lists. Nothing here is
//! persisted; the dashboard recomputes from counts on every view.

use rust_decimal::Decimal;

use crate::domain::aggregates::Offer;
use crate::domain::value_objects::{Currency, Money};

pub const XP_PER_OFFER: u32 = 10;
pub const XP_PER_OPPORTUNITY: u32 = 5;
pub const XP_PER_AUTOMATION: u32 = 15;
pub const XP_PER_LEVEL: u32 = 50;

/// Experience and earnings domain service
pub struct ProgressService;

impl ProgressService {
    /// Total experience earned from the current record counts
    pub fn experience(offers: usize, opportunities: usize, automations: usize) -> u32 {
        offers as u32 * XP_PER_OFFER
            + opportunities as u32 * XP_PER_OPPORTUNITY
            + automations as u32 * XP_PER_AUTOMATION
    }

    /// Level for a given experience total, starting at 1
    pub fn level(experience: u32) -> u32 {
        experience / XP_PER_LEVEL + 1
    }

    /// Experience accumulated inside the current level
    pub fn experience_into_level(experience: u32) -> u32 {
        experience % XP_PER_LEVEL
    }

    /// Sum of the estimated values of all offers
    pub fn estimated_earnings(offers: &[Offer]) -> Money {
        let total: Decimal = offers
            .iter()
            .map(|offer| offer.estimated_value().amount())
            .sum();
        Money::new(total, Currency::BRL)
    }
}
