//! Supply domain — market cap and coin supply metrics.

mod convert;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Market-cap and supply figures for one coin, in USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyMetrics {
    pub market_cap: Decimal,
    pub max_supply: MaxSupply,
    pub circulating_supply: Decimal,
}

/// Maximum supply of a coin.
///
/// A `null` or absent upstream value means the coin is truly uncapped and
/// maps to `Unbounded` — never to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaxSupply {
    Bounded(Decimal),
    Unbounded,
}

impl MaxSupply {
    pub fn is_unbounded(&self) -> bool {
        matches!(self, MaxSupply::Unbounded)
    }

    pub fn bounded(&self) -> Option<&Decimal> {
        match self {
            MaxSupply::Bounded(v) => Some(v),
            MaxSupply::Unbounded => None,
        }
    }
}

impl std::fmt::Display for MaxSupply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaxSupply::Bounded(v) => write!(f, "{}", v),
            MaxSupply::Unbounded => write!(f, "∞"),
        }
    }
}
