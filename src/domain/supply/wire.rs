//! Wire types for the aggregator's latest-quotes response.
//!
//! Shape: `{"data": {"BTC": {"max_supply": ..., "circulating_supply": ...,
//! "quote": {"USD": {"market_cap": ..., "price": ...}}}}}`.

use crate::shared::serde_util::decimal_flexible_opt;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Top-level latest-quotes response, keyed by base asset.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotesResponse {
    #[serde(default)]
    pub data: HashMap<String, CoinQuote>,
}

/// Per-coin entry. Supply figures live at the coin level, monetary figures
/// inside the per-currency quote.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinQuote {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "decimal_flexible_opt::deserialize")]
    pub max_supply: Option<Decimal>,

    #[serde(default, deserialize_with = "decimal_flexible_opt::deserialize")]
    pub circulating_supply: Option<Decimal>,

    #[serde(default, deserialize_with = "decimal_flexible_opt::deserialize")]
    pub total_supply: Option<Decimal>,

    #[serde(default)]
    pub quote: HashMap<String, QuoteMetrics>,
}

/// Monetary metrics for one quote currency.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteMetrics {
    #[serde(default, deserialize_with = "decimal_flexible_opt::deserialize")]
    pub price: Option<Decimal>,

    #[serde(default, deserialize_with = "decimal_flexible_opt::deserialize")]
    pub market_cap: Option<Decimal>,

    #[serde(
        rename = "volume_24h",
        default,
        deserialize_with = "decimal_flexible_opt::deserialize"
    )]
    pub volume_24h: Option<Decimal>,
}
