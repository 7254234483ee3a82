//! # Quotes Types
//!
//! Domain types and port traits for the market quotation client.
//! This crate has ZERO external IO dependencies - only data structures,
//! payload rules, and trait definitions.
//!
//! ## Layout
//!
//! - `domain/` - Trading pairs, vendor identifiers and quotes
//! - `ports/` - Trait definitions that quote providers implement
//! - `dto/` - Wire envelope returned by the ticker endpoint
//! - `error/` - The quotation error taxonomy

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Pair, Quote, VendorPairId};
pub use dto::{TickerEnvelope, TickerInfo};
pub use error::{PayloadError, QuoteError};
pub use ports::QuoteProvider;
