//! Custom serde helpers for provider wire formats.
//!
//! Upstream payloads are inconsistent about primitive encodings: the exchange
//! sends decimals as JSON strings and timestamps as epoch milliseconds, while
//! the aggregator sends decimals as JSON numbers and timestamps as ISO-8601
//! strings. These helpers accept either encoding.

/// Deserializes a timestamp into `DateTime<Utc>`.
///
/// Accepts epoch milliseconds as a JSON number, epoch milliseconds as a
/// numeric string, or an ISO-8601 / RFC 3339 string (with or without a
/// timezone suffix).
pub mod timestamp_flexible {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Millis(i64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawTimestamp::deserialize(deserializer)? {
            RawTimestamp::Millis(ms) => from_millis(ms).map_err(serde::de::Error::custom),
            RawTimestamp::Text(s) => from_text(&s).map_err(serde::de::Error::custom),
        }
    }

    fn from_millis(ms: i64) -> Result<DateTime<Utc>, String> {
        DateTime::<Utc>::from_timestamp_millis(ms)
            .ok_or_else(|| format!("timestamp out of range: {}", ms))
    }

    fn from_text(s: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(ms) = s.parse::<i64>() {
            return from_millis(ms);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(&Utc));
        }
        // Aggregator variant without a timezone suffix, e.g. "2023-07-22T04:26:40".
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|_| format!("unrecognized timestamp: {:?}", s))
    }
}

/// Deserializes a decimal that may arrive as a JSON string or a JSON number.
pub mod decimal_flexible {
    use rust_decimal::prelude::FromPrimitive;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDecimal {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawDecimal::deserialize(deserializer)? {
            RawDecimal::Number(n) => Decimal::from_f64(n)
                .ok_or_else(|| serde::de::Error::custom(format!("non-finite number: {}", n))),
            RawDecimal::Text(s) => Decimal::from_str(&s)
                .map_err(|e| serde::de::Error::custom(format!("non-numeric {:?}: {}", s, e))),
        }
    }
}

/// `Option` variant of [`decimal_flexible`]; `null` maps to `None`.
///
/// Pair with `#[serde(default)]` so an absent key also maps to `None`.
pub mod decimal_flexible_opt {
    use rust_decimal::prelude::FromPrimitive;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDecimal {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawDecimal>::deserialize(deserializer)? {
            None => Ok(None),
            Some(RawDecimal::Number(n)) => Decimal::from_f64(n)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("non-finite number: {}", n))),
            Some(RawDecimal::Text(s)) => Decimal::from_str(&s)
                .map(Some)
                .map_err(|e| serde::de::Error::custom(format!("non-numeric {:?}: {}", s, e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use rust_decimal::Decimal;
    use serde::Deserialize;
    use std::str::FromStr;

    #[derive(Deserialize)]
    struct TsHolder {
        #[serde(deserialize_with = "super::timestamp_flexible::deserialize")]
        t: DateTime<Utc>,
    }

    #[derive(Deserialize)]
    struct DecHolder {
        #[serde(deserialize_with = "super::decimal_flexible::deserialize")]
        v: Decimal,
    }

    #[derive(Deserialize)]
    struct OptDecHolder {
        #[serde(default, deserialize_with = "super::decimal_flexible_opt::deserialize")]
        v: Option<Decimal>,
    }

    #[test]
    fn timestamp_from_millis_number() {
        let h: TsHolder = serde_json::from_str(r#"{"t": 1690000000000}"#).unwrap();
        assert_eq!(h.t.timestamp_millis(), 1_690_000_000_000);
    }

    #[test]
    fn timestamp_from_millis_string() {
        let h: TsHolder = serde_json::from_str(r#"{"t": "1690000000000"}"#).unwrap();
        assert_eq!(h.t.timestamp_millis(), 1_690_000_000_000);
    }

    #[test]
    fn timestamp_from_iso_string() {
        let h: TsHolder = serde_json::from_str(r#"{"t": "2023-07-22T04:26:40.000Z"}"#).unwrap();
        assert_eq!(h.t.timestamp_millis(), 1_690_000_000_000);
    }

    #[test]
    fn timestamp_rejects_garbage() {
        let r: Result<TsHolder, _> = serde_json::from_str(r#"{"t": "yesterday"}"#);
        assert!(r.is_err());
    }

    #[test]
    fn decimal_from_string_is_exact() {
        let h: DecHolder = serde_json::from_str(r#"{"v": "29123.45678901"}"#).unwrap();
        assert_eq!(h.v, Decimal::from_str("29123.45678901").unwrap());
    }

    #[test]
    fn decimal_from_number() {
        let h: DecHolder = serde_json::from_str(r#"{"v": 105.5}"#).unwrap();
        assert_eq!(h.v, Decimal::from_str("105.5").unwrap());
    }

    #[test]
    fn decimal_rejects_non_numeric() {
        let r: Result<DecHolder, _> = serde_json::from_str(r#"{"v": "abc"}"#);
        assert!(r.is_err());
    }

    #[test]
    fn optional_decimal_null_and_absent() {
        let h: OptDecHolder = serde_json::from_str(r#"{"v": null}"#).unwrap();
        assert_eq!(h.v, None);
        let h: OptDecHolder = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(h.v, None);
        let h: OptDecHolder = serde_json::from_str(r#"{"v": "42"}"#).unwrap();
        assert_eq!(h.v, Some(Decimal::from(42)));
    }
}
