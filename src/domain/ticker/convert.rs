//! Conversion: TickerResponse → TickerSnapshot.

use super::wire;
use super::{Change24h, TickerSnapshot};
use crate::error::ParseError;
use crate::shared::Symbol;
use tracing::warn;

impl TryFrom<(wire::TickerResponse, &Symbol)> for TickerSnapshot {
    type Error = ParseError;

    fn try_from(value: (wire::TickerResponse, &Symbol)) -> Result<Self, Self::Error> {
        let (source, symbol) = value;

        let last_price = source
            .last_price
            .or(source.price)
            .ok_or_else(|| ParseError::malformed("ticker", "neither lastPrice nor price present"))?;

        // Cross-check only: the upstream payload stays authoritative.
        if let Some(reported) = &source.symbol {
            if reported != symbol.as_str() {
                warn!(
                    requested = %symbol,
                    reported = %reported,
                    "ticker payload symbol does not match requested symbol"
                );
            }
        }

        let change_24h = match (source.price_change, source.price_change_percent) {
            (Some(price_change), Some(price_change_percent)) => Some(Change24h {
                price_change,
                price_change_percent,
                high: source.high_price,
                low: source.low_price,
                volume: source.volume,
            }),
            _ => None,
        };

        Ok(TickerSnapshot {
            symbol: symbol.clone(),
            last_price,
            change_24h,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn convert(json: &str, symbol: &str) -> Result<TickerSnapshot, ParseError> {
        let wire: wire::TickerResponse = serde_json::from_str(json).unwrap();
        TickerSnapshot::try_from((wire, &Symbol::from(symbol)))
    }

    #[test]
    fn exchange_shape_with_change_stats() {
        let snap = convert(
            r#"{"symbol":"BTCUSDT","lastPrice":"29123.45","priceChange":"-120.5",
                "priceChangePercent":"-0.41","highPrice":"29500","lowPrice":"28900",
                "volume":"12345.6"}"#,
            "BTCUSDT",
        )
        .unwrap();
        assert_eq!(snap.last_price, Decimal::from_str("29123.45").unwrap());
        let change = snap.change_24h.unwrap();
        assert_eq!(change.price_change_percent, Decimal::from_str("-0.41").unwrap());
        assert_eq!(change.high, Some(Decimal::from(29500)));
    }

    #[test]
    fn aggregator_shape_bare_price() {
        let snap = convert(r#"{"price": 29123.5}"#, "BTC").unwrap();
        assert_eq!(snap.last_price, Decimal::from_str("29123.5").unwrap());
        assert!(snap.change_24h.is_none());
        assert_eq!(snap.symbol.as_str(), "BTC");
    }

    #[test]
    fn missing_both_price_keys_is_malformed() {
        let err = convert(r#"{"symbol":"BTCUSDT"}"#, "BTCUSDT").unwrap_err();
        assert!(matches!(err, ParseError::MalformedPayload { context: "ticker", .. }));
    }
}
