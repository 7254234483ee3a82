//! Wire envelope of the ticker endpoint.
//!
//! ```text
//! { "error": [ "<message>", ... ],
//!   "result": { "<VendorPairId>": { "c": [ "<price>", "<volume>" ], ... } } }
//! ```

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::{Quote, VendorPairId};
use crate::error::{PayloadError, QuoteError};

/// Top-level response envelope.
///
/// `result` is kept as raw JSON so that tickers for other pairs, or fields we
/// do not read, cannot fail the parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TickerEnvelope {
    #[serde(default)]
    pub error: Option<Vec<String>>,
    #[serde(default)]
    pub result: Option<Map<String, Value>>,
}

/// The part of a pair's ticker we read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TickerInfo {
    /// Last trade closed: `[price, lot volume]`. Only the price is read, so
    /// the other slots are left untyped.
    #[serde(default)]
    pub c: Vec<Value>,
}

impl TickerEnvelope {
    /// Parses a response body. The declared media type is not consulted.
    pub fn from_slice(body: &[u8]) -> Result<Self, PayloadError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// First error reported by the API, if any.
    pub fn api_error(&self) -> Option<&str> {
        self.error
            .as_deref()
            .and_then(|errors| errors.first())
            .map(String::as_str)
    }

    /// Extracts the last trade price for `pair`.
    ///
    /// API-reported errors take precedence over any `result` content.
    pub fn into_quote(self, pair: VendorPairId) -> Result<Quote, QuoteError> {
        if let Some(message) = self.api_error() {
            return Err(QuoteError::Api(message.to_string()));
        }

        let mut result = self.result.ok_or(PayloadError::MissingResult)?;
        let ticker = result
            .remove(pair.as_str())
            .ok_or(PayloadError::MissingPair(pair))?;
        let ticker: TickerInfo = serde_json::from_value(ticker).map_err(PayloadError::Json)?;

        let price = ticker
            .c
            .first()
            .and_then(Value::as_str)
            .ok_or(PayloadError::MissingPrice(pair))?;

        Quote::parse(price).map_err(|source| {
            PayloadError::InvalidPrice {
                value: price.to_string(),
                source,
            }
            .into()
        })
    }
}
