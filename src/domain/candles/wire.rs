//! Wire types for OHLCV responses.
//!
//! Two upstream shapes exist:
//! - the exchange kline format: fixed-position 12-element arrays,
//! - the aggregator OHLCV format: keyed records with a nested USD quote.

use crate::shared::serde_util::{decimal_flexible, timestamp_flexible};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// One kline row from the exchange REST API.
///
/// The upstream sends a positional array, not an object; serde maps it onto
/// this struct in field order. All 12 positions must be present.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeKline {
    #[serde(deserialize_with = "timestamp_flexible::deserialize")]
    pub open_time: DateTime<Utc>,
    #[serde(deserialize_with = "decimal_flexible::deserialize")]
    pub open: Decimal,
    #[serde(deserialize_with = "decimal_flexible::deserialize")]
    pub high: Decimal,
    #[serde(deserialize_with = "decimal_flexible::deserialize")]
    pub low: Decimal,
    #[serde(deserialize_with = "decimal_flexible::deserialize")]
    pub close: Decimal,
    #[serde(deserialize_with = "decimal_flexible::deserialize")]
    pub volume: Decimal,
    #[serde(deserialize_with = "timestamp_flexible::deserialize")]
    pub close_time: DateTime<Utc>,
    #[serde(deserialize_with = "decimal_flexible::deserialize")]
    pub quote_asset_volume: Decimal,
    pub trade_count: u64,
    #[serde(deserialize_with = "decimal_flexible::deserialize")]
    pub taker_buy_base_volume: Decimal,
    #[serde(deserialize_with = "decimal_flexible::deserialize")]
    pub taker_buy_quote_volume: Decimal,
    /// Unused trailing field the exchange documents as "ignore".
    pub ignore: serde_json::Value,
}

/// One record from the aggregator's keyed OHLCV format.
#[derive(Debug, Clone, Deserialize)]
pub struct AggregatorOhlcvEntry {
    #[serde(deserialize_with = "timestamp_flexible::deserialize")]
    pub time_open: DateTime<Utc>,
    pub quote: AggregatorOhlcvQuote,
}

/// The nested quote wrapper; only the USD leg is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct AggregatorOhlcvQuote {
    #[serde(rename = "USD")]
    pub usd: AggregatorOhlcvValues,
}

/// OHLCV values inside the USD quote.
#[derive(Debug, Clone, Deserialize)]
pub struct AggregatorOhlcvValues {
    #[serde(deserialize_with = "decimal_flexible::deserialize")]
    pub open: Decimal,
    #[serde(deserialize_with = "decimal_flexible::deserialize")]
    pub high: Decimal,
    #[serde(deserialize_with = "decimal_flexible::deserialize")]
    pub low: Decimal,
    #[serde(deserialize_with = "decimal_flexible::deserialize")]
    pub close: Decimal,
    #[serde(deserialize_with = "decimal_flexible::deserialize")]
    pub volume: Decimal,
}
