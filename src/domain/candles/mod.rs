//! Candle domain — OHLCV bars and the derived chart series.

mod convert;
pub mod wire;

use crate::shared::{Symbol, Timeframe};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One bar of aggregated trade data over one interval.
///
/// Expected shape is `low ≤ open,close ≤ high` with non-negative volume, but
/// the upstream is authoritative: a bar violating the shape is accepted and
/// logged, never rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcvBar {
    pub open_time: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}

/// An ordered candle series for one symbol and one timeframe, plus the
/// derived per-bar percent-return column.
///
/// Bar order is upstream order, verbatim — the series is never re-sorted, so
/// charts faithfully show gaps or disorder in intermittent provider data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub symbol: Symbol,
    pub timeframe: Timeframe,
    pub bars: Vec<OhlcvBar>,
    /// `returns[i] = (close[i] - close[i-1]) / close[i-1] * 100` for `i > 0`.
    /// `returns[0]` is `None` (undefined, never zero); so is any entry whose
    /// previous close is zero.
    pub returns: Vec<Option<Decimal>>,
}

impl PriceSeries {
    /// Build a series from normalized bars, deriving the returns column.
    pub fn from_bars(symbol: Symbol, timeframe: Timeframe, bars: Vec<OhlcvBar>) -> Self {
        for bar in &bars {
            if bar.high < bar.low {
                warn!(
                    symbol = %symbol,
                    open_time = %bar.open_time,
                    high = %bar.high,
                    low = %bar.low,
                    "bar has high < low; keeping upstream values"
                );
            }
        }

        let returns = derive_returns(&bars);
        Self {
            symbol,
            timeframe,
            bars,
            returns,
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Sum of `high` grouped by open time, in first-seen order.
    ///
    /// Equal to the `high` column itself whenever open times are unique;
    /// duplicate timestamps (possible when series are concatenated across
    /// fetches) are summed into one point.
    pub fn high_sums(&self) -> Vec<(DateTime<Utc>, Decimal)> {
        let mut out: Vec<(DateTime<Utc>, Decimal)> = Vec::with_capacity(self.bars.len());
        for bar in &self.bars {
            match out.iter_mut().find(|(t, _)| *t == bar.open_time) {
                Some((_, sum)) => *sum += bar.high,
                None => out.push((bar.open_time, bar.high)),
            }
        }
        out
    }

    /// The close column, for "closing price over time" charts.
    pub fn closes(&self) -> impl Iterator<Item = (DateTime<Utc>, Decimal)> + '_ {
        self.bars.iter().map(|b| (b.open_time, b.close))
    }
}

fn derive_returns(bars: &[OhlcvBar]) -> Vec<Option<Decimal>> {
    let hundred = Decimal::from(100);
    bars.iter()
        .enumerate()
        .map(|(i, bar)| {
            if i == 0 {
                return None;
            }
            let prev = bars[i - 1].close;
            if prev.is_zero() {
                return None;
            }
            Some((bar.close - prev) / prev * hundred)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    fn bar(ts_ms: i64, close: &str) -> OhlcvBar {
        let close = Decimal::from_str(close).unwrap();
        OhlcvBar {
            open_time: Utc.timestamp_millis_opt(ts_ms).unwrap(),
            open: close,
            high: close,
            low: close,
            close,
            volume: Decimal::ONE,
        }
    }

    #[test]
    fn returns_first_is_none_never_zero() {
        let series = PriceSeries::from_bars(
            Symbol::from("BTCUSDT"),
            Timeframe::Hour1,
            vec![bar(0, "100"), bar(1, "110"), bar(2, "99")],
        );
        assert_eq!(
            series.returns,
            vec![
                None,
                Some(Decimal::from(10)),
                Some(Decimal::from(-10)),
            ]
        );
    }

    #[test]
    fn returns_none_on_zero_previous_close() {
        let series = PriceSeries::from_bars(
            Symbol::from("X"),
            Timeframe::Day1,
            vec![bar(0, "0"), bar(1, "5")],
        );
        assert_eq!(series.returns, vec![None, None]);
    }

    #[test]
    fn high_sums_equals_high_for_unique_times() {
        let series = PriceSeries::from_bars(
            Symbol::from("BTCUSDT"),
            Timeframe::Hour1,
            vec![bar(0, "100"), bar(1, "110")],
        );
        let sums = series.high_sums();
        assert_eq!(sums.len(), 2);
        assert_eq!(sums[0].1, Decimal::from(100));
        assert_eq!(sums[1].1, Decimal::from(110));
    }

    #[test]
    fn high_sums_groups_duplicate_times() {
        let series = PriceSeries::from_bars(
            Symbol::from("BTCUSDT"),
            Timeframe::Hour1,
            vec![bar(5, "100"), bar(0, "7"), bar(5, "50")],
        );
        let sums = series.high_sums();
        // First-seen order, duplicates summed.
        assert_eq!(sums.len(), 2);
        assert_eq!(sums[0].0.timestamp_millis(), 5);
        assert_eq!(sums[0].1, Decimal::from(150));
        assert_eq!(sums[1].1, Decimal::from(7));
    }

    #[test]
    fn order_is_preserved_not_sorted() {
        let series = PriceSeries::from_bars(
            Symbol::from("BTCUSDT"),
            Timeframe::Hour1,
            vec![bar(300, "3"), bar(100, "1"), bar(200, "2")],
        );
        let times: Vec<i64> = series.bars.iter().map(|b| b.open_time.timestamp_millis()).collect();
        assert_eq!(times, vec![300, 100, 200]);
    }

    #[test]
    fn high_lt_low_is_accepted() {
        let mut b = bar(0, "100");
        b.high = Decimal::from(10);
        b.low = Decimal::from(90);
        let series =
            PriceSeries::from_bars(Symbol::from("BTCUSDT"), Timeframe::Hour1, vec![b.clone()]);
        assert_eq!(series.bars[0], b);
    }

    #[test]
    fn series_roundtrips_exactly() {
        let mut b = bar(1_690_000_000_000, "29123.45678901");
        b.volume = Decimal::from_str("0.000123").unwrap();
        let series =
            PriceSeries::from_bars(Symbol::from("BTCUSDT"), Timeframe::Hour1, vec![b]);
        let json = serde_json::to_string(&series).unwrap();
        let back: PriceSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(series, back);
    }
}
