//! Conversion: wire kline/OHLCV records → OhlcvBar.

use super::wire;
use super::OhlcvBar;

impl From<wire::ExchangeKline> for OhlcvBar {
    fn from(k: wire::ExchangeKline) -> Self {
        Self {
            open_time: k.open_time,
            open: k.open,
            high: k.high,
            low: k.low,
            close: k.close,
            volume: k.volume,
        }
    }
}

impl From<wire::AggregatorOhlcvEntry> for OhlcvBar {
    fn from(e: wire::AggregatorOhlcvEntry) -> Self {
        let usd = e.quote.usd;
        Self {
            open_time: e.time_open,
            open: usd.open,
            high: usd.high,
            low: usd.low,
            close: usd.close,
            volume: usd.volume,
        }
    }
}
