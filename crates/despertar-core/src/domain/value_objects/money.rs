//! Money Value Object
//!
//! Immutable monetary value with currency.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Money value object with currency
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Create a new money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create zero money
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Create BRL money
    pub fn brl(amount: Decimal) -> Self {
        Self::new(amount, Currency::BRL)
    }

    /// Get the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Get the currency
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Check if same currency
    pub fn same_currency(&self, other: &Money) -> bool {
        self.currency == other.currency
    }

    /// Add money (must be same currency)
    pub fn add(&self, other: &Money) -> Result<Money, MoneyError> {
        if !self.same_currency(other) {
            return Err(MoneyError::CurrencyMismatch);
        }
        Ok(Money::new(self.amount + other.amount, self.currency.clone()))
    }

    /// Check if positive
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.amount == Decimal::ZERO
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero(Currency::BRL)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.currency, self.amount)
    }
}

/// Currency enum
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    BRL,
    USD,
    EUR,
}

impl Currency {
    pub fn code(&self) -> &str {
        match self {
            Self::BRL => "BRL",
            Self::USD => "USD",
            Self::EUR => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::BRL
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    CurrencyMismatch,
}

impl std::error::Error for MoneyError {}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrencyMismatch => write!(f, "Currency mismatch"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let money = Money::brl(Decimal::new(3000, 2)); // R$ 30.00
        assert_eq!(money.amount(), Decimal::new(3000, 2));
        assert_eq!(money.currency(), &Currency::BRL);
    }

    #[test]
    fn test_money_add() {
        let a = Money::brl(Decimal::new(5000, 2));
        let b = Money::brl(Decimal::new(8000, 2));
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.amount(), Decimal::new(13000, 2));
    }

    #[test]
    fn test_money_currency_mismatch() {
        let brl = Money::brl(Decimal::new(1000, 2));
        let usd = Money::new(Decimal::new(500, 2), Currency::USD);
        assert!(matches!(brl.add(&usd), Err(MoneyError::CurrencyMismatch)));
    }

    #[test]
    fn test_money_zero() {
        let money = Money::zero(Currency::BRL);
        assert!(money.is_zero());
        assert!(!money.is_positive());
    }

    #[test]
    fn test_money_display() {
        let money = Money::brl(Decimal::new(50, 0));
        assert_eq!(money.to_string(), "BRL 50.00");
    }
}
