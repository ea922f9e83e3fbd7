//! Ticker domain — 24h snapshot for one symbol.

mod convert;
pub mod wire;

use crate::shared::Symbol;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A snapshot of current trading statistics for one symbol.
///
/// Immutable once constructed; a dashboard creates one per user selection and
/// discards it on the next fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerSnapshot {
    pub symbol: Symbol,
    pub last_price: Decimal,
    /// 24h change statistics — present for exchange tickers, absent for
    /// aggregator price payloads.
    pub change_24h: Option<Change24h>,
}

/// 24-hour rolling window statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change24h {
    pub price_change: Decimal,
    pub price_change_percent: Decimal,
    pub high: Option<Decimal>,
    pub low: Option<Decimal>,
    pub volume: Option<Decimal>,
}
