//! Network URL constants for the Coindash SDK.

/// Default exchange REST API base URL (Binance public API).
pub const DEFAULT_EXCHANGE_API_URL: &str = "https://api.binance.com";

/// Default aggregator REST API base URL (CoinMarketCap Pro).
pub const DEFAULT_AGGREGATOR_API_URL: &str = "https://pro-api.coinmarketcap.com";
