//! Display formatting for metric widgets.
//!
//! Produces the strings a dashboard shell puts in its scalar metric tiles:
//! thousands-grouped prices, whole-dollar market caps, supply counts.

use rust_decimal::Decimal;

/// Group the integer part of a plain decimal string with commas.
fn group_thousands(s: &str) -> String {
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format a price for display, e.g. `29123.456` → `"29,123.46 USD"`.
pub fn price_usd(value: &Decimal) -> String {
    format!("{} USD", group_thousands(&value.round_dp(2).to_string()))
}

/// Format a market cap as whole dollars, e.g. `"$1,234,567,890"`.
pub fn market_cap_usd(value: &Decimal) -> String {
    format!("${}", group_thousands(&value.round_dp(0).to_string()))
}

/// Format a supply count in units of an asset, e.g. `"19,700,000 BTC"`.
pub fn supply(value: &Decimal, asset: &str) -> String {
    format!("{} {}", group_thousands(&value.round_dp(0).to_string()), asset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567.89"), "1,234,567.89");
        assert_eq!(group_thousands("-1234567"), "-1,234,567");
    }

    #[test]
    fn test_price_rounds_to_cents() {
        let v = Decimal::from_str("29123.456").unwrap();
        assert_eq!(price_usd(&v), "29,123.46 USD");
    }

    #[test]
    fn test_market_cap_whole_dollars() {
        let v = Decimal::from_str("1234567890.7").unwrap();
        assert_eq!(market_cap_usd(&v), "$1,234,567,891");
    }

    #[test]
    fn test_supply_with_asset() {
        let v = Decimal::from_str("19700000").unwrap();
        assert_eq!(supply(&v, "BTC"), "19,700,000 BTC");
    }
}
