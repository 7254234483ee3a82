//! Error taxonomy for quotation calls.
//!
//! Errors are layered so callers can branch on them: caller-input errors never
//! touch the network, transport failures are kept apart from errors reported by
//! the API, and both are kept apart from responses we could not make sense of.

use crate::domain::VendorPairId;

/// Top-level error for a quotation call.
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    /// The canonical pair name is not in the pair table. Detected before any I/O.
    #[error("Unknown pair name: {0:?}")]
    InvalidPair(String),

    /// Connection, TLS, DNS, timeout or body-read failure.
    #[error("Failed to reach quote API: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The API answered with a well-formed envelope carrying an error.
    #[error("Quote API error: {0}")]
    Api(String),

    /// The API answered with something we could not read a price from.
    #[error("Failed to parse quote API response: {0}")]
    Payload(#[from] PayloadError),
}

impl QuoteError {
    /// Wraps a transport-level failure, keeping it as the error source.
    pub fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        QuoteError::Transport(Box::new(err))
    }

    /// True when repeating the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, QuoteError::Transport(_))
    }

    /// True when the remote service answered but not with a usable quote.
    pub fn is_quotation_error(&self) -> bool {
        matches!(self, QuoteError::Api(_) | QuoteError::Payload(_))
    }
}

/// Why a response could not be turned into a quote.
///
/// All variants surface to callers as [`QuoteError::Payload`]; the detail is
/// kept for logs and bug reports.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("envelope has no result")]
    MissingResult,

    #[error("result has no ticker for {0}")]
    MissingPair(VendorPairId),

    #[error("ticker for {0} has no last trade price")]
    MissingPrice(VendorPairId),

    #[error("invalid price {value:?}: {source}")]
    InvalidPrice {
        value: String,
        #[source]
        source: rust_decimal::Error,
    },
}
