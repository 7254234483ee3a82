//! Canonical trading pairs and their vendor identifiers.
//!
//! Pairs are defined declaratively with [`define_pairs!`], which generates the
//! [`Pair`] enum together with its lookup table, parsing and serde support.
//!
//! # Adding a New Pair
//! ```ignore
//! define_pairs! {
//!     // ... existing pairs ...
//!     SolUsd => ("solusd", "SOLUSD"),
//! }
//! ```
//!
//! # Example
//! ```
//! use quotes_types::Pair;
//!
//! let pair: Pair = "btcusd".parse().unwrap();
//! assert_eq!(pair.vendor_id().as_str(), "XXBTZUSD");
//! ```

use std::fmt;

use serde::Serialize;

use crate::error::QuoteError;

/// Exchange-specific pair identifier, inserted verbatim into request URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VendorPairId(&'static str);

impl VendorPairId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for VendorPairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Macro to define trading pairs with their vendor identifiers.
///
/// # Syntax
/// ```ignore
/// define_pairs! {
///     VariantName => ("canonical", "VENDORID"),
/// }
/// ```
macro_rules! define_pairs {
    (
        $(
            $name:ident => ($symbol:literal, $vendor:literal)
        ),* $(,)?
    ) => {
        /// Trading pairs the quotation client knows how to price.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum Pair {
            $(
                #[serde(rename = $symbol)]
                $name
            ),*
        }

        impl Pair {
            /// Caller-facing canonical name, e.g. `btcusd`.
            pub fn symbol(&self) -> &'static str {
                match self {
                    $(Pair::$name => $symbol),*
                }
            }

            /// Identifier understood by the remote API.
            pub fn vendor_id(&self) -> VendorPairId {
                match self {
                    $(Pair::$name => VendorPairId($vendor)),*
                }
            }

            pub fn all() -> &'static [Pair] {
                &[$(Pair::$name),*]
            }
        }

        impl std::str::FromStr for Pair {
            type Err = QuoteError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($symbol => Ok(Pair::$name),)*
                    _ => Err(QuoteError::InvalidPair(s.to_string())),
                }
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// PAIR DEFINITIONS
// ─────────────────────────────────────────────────────────────────────────────

define_pairs! {
    BtcUsd => ("btcusd", "XXBTZUSD"),
    EthUsd => ("ethusd", "XETHZUSD"),
    LtcUsd => ("ltcusd", "XLTCZUSD"),
    XrpUsd => ("xrpusd", "XXRPZUSD"),
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
