//! Quote provider port.
//!
//! Implementations can be HTTP clients, canned providers for tests, etc.

use crate::{Pair, Quote, QuoteError};

/// Port trait for latest-trade price providers.
#[async_trait::async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Get the latest trade price for an already validated pair.
    async fn get_pair_price(&self, pair: Pair) -> Result<Quote, QuoteError>;

    /// Get the latest trade price for a canonical pair name such as `btcusd`.
    ///
    /// Unknown names fail with [`QuoteError::InvalidPair`] before any I/O.
    async fn get_price(&self, pair: &str) -> Result<Quote, QuoteError> {
        let pair: Pair = pair.parse()?;
        self.get_pair_price(pair).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use rust_decimal::Decimal;

    use super::*;

    /// Records which pairs were requested and answers with a fixed price.
    struct FixedProvider {
        requested: Mutex<Vec<Pair>>,
    }

    #[async_trait::async_trait]
    impl QuoteProvider for FixedProvider {
        async fn get_pair_price(&self, pair: Pair) -> Result<Quote, QuoteError> {
            self.requested.lock().unwrap().push(pair);
            Ok(Quote::new(Decimal::new(42, 0)))
        }
    }

    #[tokio::test]
    async fn test_get_price_resolves_pair() {
        let provider = FixedProvider {
            requested: Mutex::new(Vec::new()),
        };
        let quote = provider.get_price("ethusd").await.unwrap();
        assert_eq!(quote.price(), Decimal::new(42, 0));
        assert_eq!(*provider.requested.lock().unwrap(), vec![Pair::EthUsd]);
    }

    #[tokio::test]
    async fn test_get_price_rejects_unknown_pair_without_calling_provider() {
        let provider = FixedProvider {
            requested: Mutex::new(Vec::new()),
        };
        let err = provider.get_price("foobar").await.unwrap_err();
        assert!(matches!(err, QuoteError::InvalidPair(ref name) if name == "foobar"));
        assert!(provider.requested.lock().unwrap().is_empty());
    }
}
