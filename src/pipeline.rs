//! The normalization pipeline: raw provider payloads → canonical entities.
//!
//! Every operation here is a pure function over an opaque JSON payload
//! handed in by a fetch collaborator. Each is total: it returns a
//! fully-populated entity or a [`ParseError`], never a partial entity and
//! never a retry. Suspicious-but-possible provider data (a bar with
//! `high < low`, a symbol mismatch) is accepted with a warning — the
//! upstream is authoritative.

use crate::domain::candles::{wire as candle_wire, OhlcvBar, PriceSeries};
use crate::domain::supply::{wire as supply_wire, SupplyMetrics};
use crate::domain::ticker::{wire as ticker_wire, TickerSnapshot};
use crate::error::ParseError;
use crate::shared::{Symbol, Timeframe};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which upstream OHLCV payload shape to expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesFormat {
    /// Fixed-position 12-element arrays (exchange kline format).
    ExchangeKlines,
    /// Keyed records with a nested USD quote (aggregator OHLCV format).
    AggregatorOhlcv,
}

/// Normalize a raw ticker payload into a [`TickerSnapshot`].
///
/// Locates `lastPrice` (exchange shape) or `price` (aggregator shape) and
/// parses it as a decimal. Fails with `MalformedPayload` if neither key is
/// present or the value is non-numeric. `symbol` is used for cross-checking
/// against the payload's own symbol field; a mismatch is logged, not fatal.
pub fn parse_ticker(raw: &Value, symbol: &Symbol) -> Result<TickerSnapshot, ParseError> {
    let wire: ticker_wire::TickerResponse = serde_json::from_value(raw.clone())
        .map_err(|e| ParseError::malformed("ticker", e.to_string()))?;
    TickerSnapshot::try_from((wire, symbol))
}

/// Normalize a raw OHLCV payload into a [`PriceSeries`].
///
/// Timestamps are normalized to UTC from epoch milliseconds or ISO-8601
/// strings; all four prices and volume are parsed as decimals. Fails with
/// `MalformedPayload` on an empty sequence, a missing field, or a
/// non-numeric element. Upstream bar order is preserved verbatim.
pub fn parse_ohlcv_series(
    raw: &Value,
    format: SeriesFormat,
    symbol: &Symbol,
    timeframe: Timeframe,
) -> Result<PriceSeries, ParseError> {
    let bars: Vec<OhlcvBar> = match format {
        SeriesFormat::ExchangeKlines => {
            let rows: Vec<candle_wire::ExchangeKline> = serde_json::from_value(raw.clone())
                .map_err(|e| ParseError::malformed("ohlcv", e.to_string()))?;
            rows.into_iter().map(OhlcvBar::from).collect()
        }
        SeriesFormat::AggregatorOhlcv => {
            let rows: Vec<candle_wire::AggregatorOhlcvEntry> = serde_json::from_value(raw.clone())
                .map_err(|e| ParseError::malformed("ohlcv", e.to_string()))?;
            rows.into_iter().map(OhlcvBar::from).collect()
        }
    };

    if bars.is_empty() {
        return Err(ParseError::malformed("ohlcv", "empty series"));
    }

    Ok(PriceSeries::from_bars(symbol.clone(), timeframe, bars))
}

/// Normalize a raw latest-quotes payload into [`SupplyMetrics`].
///
/// Extracts market cap (USD quote), max supply, and circulating supply for
/// the symbol's base asset. A `null` or absent max supply maps to
/// [`MaxSupply::Unbounded`](crate::domain::supply::MaxSupply::Unbounded),
/// never to zero. Fails with `MalformedPayload` when market cap or
/// circulating supply is missing.
pub fn parse_supply(raw: &Value, symbol: &Symbol) -> Result<SupplyMetrics, ParseError> {
    let wire: supply_wire::QuotesResponse = serde_json::from_value(raw.clone())
        .map_err(|e| ParseError::malformed("supply", e.to_string()))?;
    SupplyMetrics::try_from((wire, symbol))
}
