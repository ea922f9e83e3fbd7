//! Shared newtypes used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the providers send, so they can be used
//! directly in wire types without conversion overhead.

pub mod fmt;
pub mod serde_util;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// The default symbol menu a dashboard offers.
pub const DEFAULT_SYMBOLS: [&str; 6] = [
    "BTCUSDT", "ETHUSDT", "BNBUSDT", "SOLUSDT", "XRPUSDT", "DOGEUSDT",
];

// ─── Symbol ──────────────────────────────────────────────────────────────────

/// A trading pair or coin identifier as the provider spells it
/// (e.g. `"BTCUSDT"` on an exchange, `"BTC"` on an aggregator).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

/// Quote-asset suffixes stripped by [`Symbol::base_asset`], longest first.
const QUOTE_SUFFIXES: [&str; 4] = ["USDT", "BUSD", "USDC", "USD"];

impl Symbol {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The base asset of a pair: `"BTCUSDT"` → `"BTC"`.
    ///
    /// Aggregators key their quote payloads by base asset, not by pair.
    /// Returns the full symbol unchanged when no known quote suffix matches.
    pub fn base_asset(&self) -> &str {
        for suffix in QUOTE_SUFFIXES {
            if let Some(base) = self.0.strip_suffix(suffix) {
                if !base.is_empty() {
                    return base;
                }
            }
        }
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for Symbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Symbol(s.to_string()))
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Symbol(s))
    }
}

// ─── Timeframe ───────────────────────────────────────────────────────────────

/// Candle aggregation interval, covering the dashboard's timeframe menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[default]
    #[serde(rename = "30m")]
    Minute30,
    #[serde(rename = "1h")]
    Hour1,
    #[serde(rename = "4h")]
    Hour4,
    #[serde(rename = "12h")]
    Hour12,
    #[serde(rename = "1d")]
    Day1,
    #[serde(rename = "1w")]
    Week1,
    #[serde(rename = "1M")]
    Month1,
}

impl Timeframe {
    /// All timeframes in menu order.
    pub const ALL: [Timeframe; 7] = [
        Self::Minute30,
        Self::Hour1,
        Self::Hour4,
        Self::Hour12,
        Self::Day1,
        Self::Week1,
        Self::Month1,
    ];

    /// Canonical interval code (also the exchange kline code).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute30 => "30m",
            Self::Hour1 => "1h",
            Self::Hour4 => "4h",
            Self::Hour12 => "12h",
            Self::Day1 => "1d",
            Self::Week1 => "1w",
            Self::Month1 => "1M",
        }
    }

    /// Human-readable menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Minute30 => "30 minutes",
            Self::Hour1 => "1 hour",
            Self::Hour4 => "4 hours",
            Self::Hour12 => "12 hours",
            Self::Day1 => "1 day",
            Self::Week1 => "1 week",
            Self::Month1 => "1 month",
        }
    }

    /// Bucket width in seconds. A month is treated as 30 days.
    pub fn seconds(&self) -> u64 {
        match self {
            Self::Minute30 => 1_800,
            Self::Hour1 => 3_600,
            Self::Hour4 => 14_400,
            Self::Hour12 => 43_200,
            Self::Day1 => 86_400,
            Self::Week1 => 604_800,
            Self::Month1 => 2_592_000,
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_asset_strips_quote_suffix() {
        assert_eq!(Symbol::from("BTCUSDT").base_asset(), "BTC");
        assert_eq!(Symbol::from("DOGEUSDT").base_asset(), "DOGE");
        assert_eq!(Symbol::from("ETHBUSD").base_asset(), "ETH");
        assert_eq!(Symbol::from("SOLUSD").base_asset(), "SOL");
    }

    #[test]
    fn test_base_asset_passthrough_without_suffix() {
        assert_eq!(Symbol::from("BTC").base_asset(), "BTC");
        // A bare quote asset is not stripped to nothing.
        assert_eq!(Symbol::from("USDT").base_asset(), "USDT");
    }

    #[test]
    fn test_symbol_serde_transparent() {
        let s = Symbol::from("BTCUSDT");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "\"BTCUSDT\"");
        let back: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }

    #[test]
    fn test_timeframe_serde() {
        let tf: Timeframe = serde_json::from_str("\"1h\"").unwrap();
        assert_eq!(tf, Timeframe::Hour1);
        assert_eq!(tf.seconds(), 3600);
        // 1w and 1M are distinct codes.
        let w: Timeframe = serde_json::from_str("\"1w\"").unwrap();
        let m: Timeframe = serde_json::from_str("\"1M\"").unwrap();
        assert_eq!(w, Timeframe::Week1);
        assert_eq!(m, Timeframe::Month1);
    }

    #[test]
    fn test_timeframe_menu_order() {
        assert_eq!(Timeframe::ALL[0], Timeframe::default());
        assert_eq!(Timeframe::ALL[0].label(), "30 minutes");
        assert_eq!(Timeframe::ALL[6].label(), "1 month");
    }
}
