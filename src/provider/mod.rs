//! Upstream market-data providers.
//!
//! One capability trait instead of one script per upstream: each provider
//! knows its own payload shape and timeframe→interval-code mapping, and
//! yields canonical entities by running raw payloads through the
//! [`pipeline`](crate::pipeline). Supply metrics are aggregator-only and
//! live as an inherent method on [`AggregatorProvider`].

pub mod aggregator;
pub mod exchange;

pub use aggregator::AggregatorProvider;
pub use exchange::ExchangeProvider;

use crate::domain::candles::PriceSeries;
use crate::domain::ticker::TickerSnapshot;
use crate::error::SdkError;
use crate::pipeline::SeriesFormat;
use crate::shared::{Symbol, Timeframe};

/// A source of normalized ticker and candle data.
#[allow(async_fn_in_trait)]
pub trait MarketDataProvider {
    /// Provider name for logs and error context.
    fn name(&self) -> &'static str;

    /// Which OHLCV payload shape this provider emits.
    fn series_format(&self) -> SeriesFormat;

    /// The provider-specific code for a timeframe.
    fn interval_code(&self, timeframe: Timeframe) -> &'static str;

    /// Fetch and normalize the current ticker snapshot.
    async fn ticker(&self, symbol: &Symbol) -> Result<TickerSnapshot, SdkError>;

    /// Fetch and normalize one candle window.
    async fn ohlcv(
        &self,
        symbol: &Symbol,
        timeframe: Timeframe,
        limit: u32,
    ) -> Result<PriceSeries, SdkError>;
}
