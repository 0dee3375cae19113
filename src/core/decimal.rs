//! Price number handling: JSON numbers to `Decimal`, rounding, display.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Fractional digits kept for a displayed price.
pub const PRICE_DP: u32 = 2;

/// Convert a JSON number to `Decimal` through its textual form so no binary
/// float rounding leaks in. Accepts scientific notation (`1.5e3`).
pub(crate) fn number_to_decimal(n: &serde_json::Number) -> Option<Decimal> {
    let text = n.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

/// Round a price to two fractional digits.
///
/// Uses `Decimal::round_dp`, i.e. banker's rounding
/// (`RoundingStrategy::MidpointNearestEven`): `0.125 -> 0.12`, `0.135 -> 0.14`.
#[must_use]
pub fn round_price(value: Decimal) -> Decimal {
    value.round_dp(PRICE_DP)
}

/// Format a price with thousands separators and exactly two fractional
/// digits, e.g. `43210.5` -> `43,210.50`.
#[must_use]
pub fn format_price(value: Decimal) -> String {
    let mut v = round_price(value);
    v.rescale(PRICE_DP);
    let text = v.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut out = String::with_capacity(text.len() + text.len() / 3 + 1);
    if v.is_sign_negative() && !v.is_zero() {
        out.push('-');
    }
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push('.');
    out.push_str(frac_part);
    out
}
