//! Public exchange REST provider (Binance-style): 24h ticker + klines.

use crate::config::ExchangeConfig;
use crate::domain::candles::PriceSeries;
use crate::domain::ticker::TickerSnapshot;
use crate::error::SdkError;
use crate::http::MarketHttp;
use crate::pipeline::{self, SeriesFormat};
use crate::shared::{Symbol, Timeframe};

use super::MarketDataProvider;

/// Provider backed by a public exchange REST API. No credentials required.
#[derive(Clone)]
pub struct ExchangeProvider {
    http: MarketHttp,
}

impl ExchangeProvider {
    pub fn new(config: ExchangeConfig) -> Self {
        Self {
            http: MarketHttp::new(&config.base_url),
        }
    }
}

impl Default for ExchangeProvider {
    fn default() -> Self {
        Self::new(ExchangeConfig::default())
    }
}

impl MarketDataProvider for ExchangeProvider {
    fn name(&self) -> &'static str {
        "exchange"
    }

    fn series_format(&self) -> SeriesFormat {
        SeriesFormat::ExchangeKlines
    }

    /// Exchange interval codes equal the canonical ones.
    fn interval_code(&self, timeframe: Timeframe) -> &'static str {
        timeframe.as_str()
    }

    async fn ticker(&self, symbol: &Symbol) -> Result<TickerSnapshot, SdkError> {
        let raw = self
            .http
            .get_ticker_24h(symbol.as_str())
            .await
            .map_err(SdkError::from_http)?;
        Ok(pipeline::parse_ticker(&raw, symbol)?)
    }

    async fn ohlcv(
        &self,
        symbol: &Symbol,
        timeframe: Timeframe,
        limit: u32,
    ) -> Result<PriceSeries, SdkError> {
        let raw = self
            .http
            .get_klines(symbol.as_str(), self.interval_code(timeframe), limit)
            .await
            .map_err(SdkError::from_http)?;
        Ok(pipeline::parse_ohlcv_series(
            &raw,
            self.series_format(),
            symbol,
            timeframe,
        )?)
    }
}
