//! High-level client — `DashboardClient`.
//!
//! One call per user interaction: `snapshot` runs a complete linear
//! fetch-and-normalize cycle and hands back everything a dashboard renders.
//! Nothing is cached or mutated between calls — every interaction recomputes
//! from scratch, and any failure aborts the whole cycle so the UI never
//! renders partial data.

use crate::config::{AggregatorConfig, ExchangeConfig};
use crate::domain::candles::PriceSeries;
use crate::domain::supply::SupplyMetrics;
use crate::domain::ticker::TickerSnapshot;
use crate::error::SdkError;
use crate::provider::{AggregatorProvider, ExchangeProvider, MarketDataProvider};
use crate::shared::{Symbol, Timeframe};

/// Candle window size fetched per interaction unless overridden.
pub const DEFAULT_CANDLE_LIMIT: u32 = 100;

/// Everything one dashboard render needs, from one fetch cycle.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub ticker: TickerSnapshot,
    pub series: PriceSeries,
    /// Present only when an aggregator is configured — supply data is a
    /// paid-aggregator capability.
    pub supply: Option<SupplyMetrics>,
}

/// The primary entry point for the Coindash SDK.
///
/// Ticker and candles come from the exchange provider; market-cap/supply
/// metrics come from the aggregator when one is configured. Callers wanting
/// aggregator-sourced candles can use [`AggregatorProvider`] through the
/// [`MarketDataProvider`] trait directly.
#[derive(Clone)]
pub struct DashboardClient {
    exchange: ExchangeProvider,
    aggregator: Option<AggregatorProvider>,
    candle_limit: u32,
}

impl DashboardClient {
    pub fn builder() -> DashboardClientBuilder {
        DashboardClientBuilder::default()
    }

    pub fn exchange(&self) -> &ExchangeProvider {
        &self.exchange
    }

    pub fn aggregator(&self) -> Option<&AggregatorProvider> {
        self.aggregator.as_ref()
    }

    /// Run one complete fetch-and-normalize cycle for a user selection.
    ///
    /// Fetches are sequential; the first error aborts the cycle and is
    /// returned as-is for the UI to surface.
    pub async fn snapshot(
        &self,
        symbol: &Symbol,
        timeframe: Timeframe,
    ) -> Result<DashboardSnapshot, SdkError> {
        let ticker = self.exchange.ticker(symbol).await?;
        let series = self
            .exchange
            .ohlcv(symbol, timeframe, self.candle_limit)
            .await?;

        let supply = match &self.aggregator {
            Some(aggregator) => Some(aggregator.supply(symbol).await?),
            None => None,
        };

        Ok(DashboardSnapshot {
            ticker,
            series,
            supply,
        })
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct DashboardClientBuilder {
    exchange: ExchangeConfig,
    aggregator: Option<AggregatorConfig>,
    candle_limit: Option<u32>,
}

impl DashboardClientBuilder {
    pub fn exchange_url(mut self, url: &str) -> Self {
        self.exchange.base_url = url.to_string();
        self
    }

    /// Configure the aggregator explicitly.
    pub fn aggregator(mut self, config: AggregatorConfig) -> Self {
        self.aggregator = Some(config);
        self
    }

    /// Configure the aggregator with the key from the environment
    /// (`COINDASH_AGGREGATOR_API_KEY`).
    pub fn aggregator_key_from_env(mut self) -> Result<Self, SdkError> {
        self.aggregator = Some(AggregatorConfig::from_env()?);
        Ok(self)
    }

    pub fn candle_limit(mut self, limit: u32) -> Self {
        self.candle_limit = Some(limit);
        self
    }

    pub fn build(self) -> Result<DashboardClient, SdkError> {
        let candle_limit = self.candle_limit.unwrap_or(DEFAULT_CANDLE_LIMIT);
        if candle_limit == 0 {
            return Err(SdkError::Config("candle_limit must be positive".into()));
        }

        Ok(DashboardClient {
            exchange: ExchangeProvider::new(self.exchange),
            aggregator: self.aggregator.map(AggregatorProvider::new),
            candle_limit,
        })
    }
}
