//! # Quotes Client
//!
//! Kraken public-API implementation of [`QuoteProvider`].
//!
//! The client borrows a caller-owned [`reqwest::Client`], so connection
//! pooling, TLS and any request deadline stay under the caller's control.
//!
//! ```no_run
//! # async fn run() -> Result<(), quotes_types::QuoteError> {
//! let http = reqwest::Client::new();
//! let kraken = quotes_client::KrakenClient::new(&http);
//! let quote = kraken.get_price("btcusd").await?;
//! println!("{quote}");
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

pub use quotes_types::{Pair, PayloadError, Quote, QuoteError, QuoteProvider, VendorPairId};
use quotes_types::TickerEnvelope;

/// Root of Kraken's public REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.kraken.com/0";

const TICKER_ENDPOINT: &str = "public/Ticker";

/// Latest-trade price client for Kraken.
///
/// Holds no mutable state, so one instance can serve concurrent callers.
pub struct KrakenClient<'a> {
    base_url: String,
    http: &'a Client,
}

impl<'a> KrakenClient<'a> {
    /// Creates a client against [`DEFAULT_BASE_URL`].
    pub fn new(http: &'a Client) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            http,
        }
    }

    /// Points the client at another API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// API root requests are sent to, without a trailing `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ticker URL for `pair`. Vendor ids are inserted verbatim.
    pub fn ticker_url(&self, pair: Pair) -> String {
        format!(
            "{}/{}?pair={}",
            self.base_url,
            TICKER_ENDPOINT,
            pair.vendor_id()
        )
    }

    /// Returns the latest trade price for a canonical pair name.
    ///
    /// Unknown names fail with [`QuoteError::InvalidPair`] and send nothing.
    pub async fn get_price(&self, pair: &str) -> Result<Quote, QuoteError> {
        let pair: Pair = pair.parse()?;
        self.get_pair_price(pair).await
    }

    /// Returns the latest trade price for `pair`.
    #[instrument(skip(self), fields(vendor_id = %pair.vendor_id()))]
    pub async fn get_pair_price(&self, pair: Pair) -> Result<Quote, QuoteError> {
        let envelope = self.fetch(&self.ticker_url(pair)).await?;

        match envelope.into_quote(pair.vendor_id()) {
            Ok(quote) => {
                debug!(price = %quote, "Received quote");
                Ok(quote)
            }
            Err(QuoteError::Api(message)) => {
                warn!("Quote API rejected request: {}", message);
                Err(QuoteError::Api(message))
            }
            Err(e) => {
                warn!("Unexpected ticker response: {}", e);
                Err(e)
            }
        }
    }

    /// Issues the GET and parses the envelope, whatever the status code.
    async fn fetch(&self, url: &str) -> Result<TickerEnvelope, QuoteError> {
        debug!(%url, "Requesting ticker");
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(QuoteError::transport)?;

        let status = resp.status();
        if !status.is_success() {
            debug!(%status, "Ticker request returned non-success status");
        }

        let body = resp.bytes().await.map_err(QuoteError::transport)?;
        Ok(TickerEnvelope::from_slice(&body)?)
    }
}

#[async_trait]
impl QuoteProvider for KrakenClient<'_> {
    async fn get_pair_price(&self, pair: Pair) -> Result<Quote, QuoteError> {
        KrakenClient::get_pair_price(self, pair).await
    }
}
