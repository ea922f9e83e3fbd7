//! # Coindash SDK
//!
//! Market-data layer for crypto price dashboards: fetch a 24h ticker
//! snapshot, an OHLCV candle window, and market-cap/supply quotes from
//! heterogeneous upstream providers, and normalize them into canonical
//! typed entities ready for chart rendering.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, the normalization pipeline
//!    (always available, no network dependency)
//! 2. **Config** — Provider endpoints and environment-sourced credentials
//! 3. **HTTP** — `MarketHttp` with per-endpoint retry policies
//! 4. **Providers** — `MarketDataProvider` implementations: exchange REST
//!    (ticker + klines) and aggregator (quotes + keyed OHLCV)
//! 5. **High-Level Client** — `DashboardClient`: one call per user
//!    interaction, producing a full `DashboardSnapshot`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coindash_sdk::prelude::*;
//!
//! let client = DashboardClient::builder()
//!     .aggregator_key_from_env()?
//!     .build()?;
//!
//! let snapshot = client.snapshot(&Symbol::from("BTCUSDT"), Timeframe::Hour1).await?;
//! println!("{} last price: {}", snapshot.ticker.symbol, snapshot.ticker.last_price);
//! ```
//!
//! Every entity is recomputed from scratch on each call; the SDK keeps no
//! state between interactions.

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// The normalization pipeline: raw provider payloads → canonical entities.
pub mod pipeline;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Config ──────────────────────────────────────────────────────────

/// Provider configuration and environment-sourced credentials.
pub mod config;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: Providers ───────────────────────────────────────────────────────

/// Upstream market-data providers behind a capability trait.
#[cfg(feature = "http")]
pub mod provider;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `DashboardClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Symbol, Timeframe, DEFAULT_SYMBOLS};

    // Domain types
    pub use crate::domain::candles::{OhlcvBar, PriceSeries};
    pub use crate::domain::supply::{MaxSupply, SupplyMetrics};
    pub use crate::domain::ticker::{Change24h, TickerSnapshot};

    // Normalization pipeline
    pub use crate::pipeline::{parse_ohlcv_series, parse_supply, parse_ticker, SeriesFormat};

    // Errors
    pub use crate::error::{ParseError, SdkError};

    // Config
    pub use crate::config::{AggregatorConfig, ApiKey, ExchangeConfig};

    // Network
    pub use crate::network::{DEFAULT_AGGREGATOR_API_URL, DEFAULT_EXCHANGE_API_URL};

    // Providers + client
    #[cfg(feature = "http")]
    pub use crate::client::{DashboardClient, DashboardClientBuilder, DashboardSnapshot};
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
    #[cfg(feature = "http")]
    pub use crate::provider::{AggregatorProvider, ExchangeProvider, MarketDataProvider};
}
