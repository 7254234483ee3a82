//! Exact-decimal price quotation.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest trade price for a pair.
///
/// Backed by [`Decimal`] so prices never pass through binary floating point.
/// The scale reported by the vendor is preserved (`3652.20000` stays
/// `3652.20000`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quote {
    price: Decimal,
}

impl Quote {
    pub fn new(price: Decimal) -> Self {
        Self { price }
    }

    /// Parses a vendor price string without rounding.
    pub fn parse(s: &str) -> Result<Self, rust_decimal::Error> {
        Decimal::from_str_exact(s).map(Self::new)
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}

impl From<Quote> for Decimal {
    fn from(quote: Quote) -> Self {
        quote.price
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.price, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_scale() {
        let quote = Quote::parse("3652.20000").unwrap();
        assert_eq!(quote.price(), Decimal::new(365220000, 5));
        assert_eq!(quote.to_string(), "3652.20000");
    }

    #[test]
    fn test_parse_has_no_float_drift() {
        let quote = Quote::parse("0.1").unwrap();
        let sum = quote.price() + Decimal::new(2, 1);
        assert_eq!(sum, Decimal::new(3, 1));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["123.456.789", "", "abc"] {
            assert!(Quote::parse(input).is_err(), "{input:?} should not parse");
        }
    }

    #[test]
    fn test_serializes_as_string() {
        let quote = Quote::parse("0.52140").unwrap();
        assert_eq!(serde_json::to_string(&quote).unwrap(), r#""0.52140""#);
    }
}
