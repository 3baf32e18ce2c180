//! Type-safe price representation using decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// The amount is held as an exact decimal in the currency's standard unit
/// (reais, not centavos). Rounding to two decimal places happens only when
/// formatting for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., reais, not centavos).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in reais (BRL).
    #[must_use]
    pub fn reais(amount: i64) -> Self {
        Self::new(Decimal::from(amount), CurrencyCode::BRL)
    }

    /// Exact line total for this price at the given quantity.
    #[must_use]
    pub fn line_total(&self, quantity: u32) -> Decimal {
        self.amount * Decimal::from(quantity)
    }
}

impl std::fmt::Display for Price {
    /// Format for display with two decimal places (e.g., "R$ 19.99").
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:.2}", self.currency_code.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    BRL,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Currency symbol used in display formatting.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::BRL => "R$",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BRL => "BRL",
            Self::USD => "USD",
            Self::EUR => "EUR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_price_display_two_decimals() {
        assert_eq!(Price::reais(10).to_string(), "R$ 10.00");
        assert_eq!(
            Price::new(Decimal::new(1999, 2), CurrencyCode::BRL).to_string(),
            "R$ 19.99"
        );
    }

    #[test]
    fn test_line_total_is_exact() {
        let price = Price::reais(10);
        assert_eq!(price.line_total(3), Decimal::from(30));
        assert_eq!(price.line_total(0), Decimal::ZERO);
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(CurrencyCode::BRL.symbol(), "R$");
        assert_eq!(CurrencyCode::BRL.code(), "BRL");
    }
}
