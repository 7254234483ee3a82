//! Port traits (interfaces for adapters).
//!
//! Callers depend on these traits, not on a concrete HTTP client.

mod quote;

pub use quote::QuoteProvider;
