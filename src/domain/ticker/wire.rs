//! Wire types for ticker responses.
//!
//! One struct covers both provider shapes: the exchange's 24h ticker carries
//! `lastPrice` plus change statistics, the aggregator's quote carries a bare
//! `price`. Which key is present decides the shape; convert rejects payloads
//! with neither.

use crate::shared::serde_util::decimal_flexible_opt;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Raw ticker payload from either provider.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerResponse {
    #[serde(default)]
    pub symbol: Option<String>,

    #[serde(
        rename = "lastPrice",
        default,
        deserialize_with = "decimal_flexible_opt::deserialize"
    )]
    pub last_price: Option<Decimal>,

    #[serde(default, deserialize_with = "decimal_flexible_opt::deserialize")]
    pub price: Option<Decimal>,

    #[serde(
        rename = "priceChange",
        default,
        deserialize_with = "decimal_flexible_opt::deserialize"
    )]
    pub price_change: Option<Decimal>,

    #[serde(
        rename = "priceChangePercent",
        default,
        deserialize_with = "decimal_flexible_opt::deserialize"
    )]
    pub price_change_percent: Option<Decimal>,

    #[serde(
        rename = "highPrice",
        default,
        deserialize_with = "decimal_flexible_opt::deserialize"
    )]
    pub high_price: Option<Decimal>,

    #[serde(
        rename = "lowPrice",
        default,
        deserialize_with = "decimal_flexible_opt::deserialize"
    )]
    pub low_price: Option<Decimal>,

    #[serde(default, deserialize_with = "decimal_flexible_opt::deserialize")]
    pub volume: Option<Decimal>,
}
