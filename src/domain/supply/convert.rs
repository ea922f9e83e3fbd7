//! Conversion: QuotesResponse → SupplyMetrics.

use super::wire;
use super::{MaxSupply, SupplyMetrics};
use crate::error::ParseError;
use crate::shared::Symbol;
use tracing::warn;

/// Quote currency consumed from the aggregator payload.
const QUOTE_CURRENCY: &str = "USD";

impl TryFrom<(wire::QuotesResponse, &Symbol)> for SupplyMetrics {
    type Error = ParseError;

    fn try_from(value: (wire::QuotesResponse, &Symbol)) -> Result<Self, Self::Error> {
        let (source, symbol) = value;
        let base = symbol.base_asset();

        let coin = source.data.get(base).ok_or_else(|| {
            ParseError::malformed("supply", format!("no data entry for {:?}", base))
        })?;

        let market_cap = coin
            .quote
            .get(QUOTE_CURRENCY)
            .and_then(|q| q.market_cap)
            .ok_or_else(|| ParseError::malformed("supply", "market_cap missing"))?;

        let circulating_supply = coin
            .circulating_supply
            .ok_or_else(|| ParseError::malformed("supply", "circulating_supply missing"))?;

        let max_supply = match coin.max_supply {
            Some(max) => MaxSupply::Bounded(max),
            None => MaxSupply::Unbounded,
        };

        if let MaxSupply::Bounded(max) = &max_supply {
            if circulating_supply > *max {
                warn!(
                    symbol = %symbol,
                    circulating = %circulating_supply,
                    max = %max,
                    "circulating supply exceeds max supply; keeping upstream values"
                );
            }
        }

        Ok(SupplyMetrics {
            market_cap,
            max_supply,
            circulating_supply,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn convert(json: &str, symbol: &str) -> Result<SupplyMetrics, ParseError> {
        let wire: wire::QuotesResponse = serde_json::from_str(json).unwrap();
        SupplyMetrics::try_from((wire, &Symbol::from(symbol)))
    }

    #[test]
    fn bounded_supply() {
        let metrics = convert(
            r#"{"data":{"BTC":{"max_supply":21000000,"circulating_supply":19700000,
                "quote":{"USD":{"market_cap":570000000000,"price":29000}}}}}"#,
            "BTCUSDT",
        )
        .unwrap();
        assert_eq!(metrics.max_supply, MaxSupply::Bounded(Decimal::from(21_000_000)));
        assert_eq!(metrics.circulating_supply, Decimal::from(19_700_000));
        assert_eq!(metrics.market_cap, Decimal::from(570_000_000_000i64));
    }

    #[test]
    fn null_max_supply_is_unbounded_never_zero() {
        let metrics = convert(
            r#"{"data":{"ETH":{"max_supply":null,"circulating_supply":120000000,
                "quote":{"USD":{"market_cap":220000000000}}}}}"#,
            "ETHUSDT",
        )
        .unwrap();
        assert_eq!(metrics.max_supply, MaxSupply::Unbounded);
    }

    #[test]
    fn missing_market_cap_is_malformed() {
        let err = convert(
            r#"{"data":{"BTC":{"max_supply":21000000,"circulating_supply":19700000,
                "quote":{"USD":{"price":29000}}}}}"#,
            "BTCUSDT",
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::MalformedPayload { context: "supply", .. }));
    }

    #[test]
    fn missing_circulating_supply_is_malformed() {
        let err = convert(
            r#"{"data":{"BTC":{"max_supply":21000000,
                "quote":{"USD":{"market_cap":570000000000}}}}}"#,
            "BTCUSDT",
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::MalformedPayload { .. }));
    }

    #[test]
    fn missing_symbol_entry_is_malformed() {
        let err = convert(r#"{"data":{}}"#, "BTCUSDT").unwrap_err();
        assert!(matches!(err, ParseError::MalformedPayload { .. }));
    }
}
