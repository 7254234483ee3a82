//! Domain models for market quotations.

pub mod pair;
pub mod quote;

pub use pair::{Pair, VendorPairId};
pub use quote::Quote;
