//! Display formatting for dashboard numbers.
//!
//! All functions are total over finite input. Non-finite input is a caller
//! bug; it is logged and rendered as zero instead of panicking.

use chrono::NaiveDate;
use rust_decimal::prelude::*;
use rusty_money::{iso, LocalFormat, Money};
use tracing::warn;

/// Fraction digits kept by [`format_number`] for non-integral values.
pub const NUMBER_MAX_FRACTION_DIGITS: u32 = 2;

/// Fraction digits shown by [`format_percentage`].
pub const PERCENTAGE_FRACTION_DIGITS: u32 = 1;

/// `None` for finite values beyond the `Decimal` range. Non-finite values become zero.
fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        warn!("Cannot format non-finite number {}, rendering 0", value);
        return Some(Decimal::ZERO);
    }
    match Decimal::from_f64(value) {
        Some(amount) => Some(amount),
        None if value.abs() < 1.0 => Some(Decimal::ZERO),
        None => None,
    }
}

/// Rounds to exactly `scale` fraction digits and never yields a negative zero.
fn fixed(value: f64, scale: u32) -> Option<Decimal> {
    let mut amount = to_decimal(value)?.round_dp(scale);
    amount.rescale(scale);
    if amount.is_zero() {
        amount.set_sign_positive(true);
    }
    Some(amount)
}

/// Inserts `separator` between groups of three digits of an unsigned integer string.
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

fn group_thousands(digits: &str) -> String {
    group_digits(digits, ',')
}

/// Unsigned text of a finite value too large for `Decimal`.
///
/// Such values are always integral, so the fraction is all zeros.
fn wide_amount(value: f64, scale: u32, separator: char, decimal_point: char) -> String {
    let mut out = group_digits(&format!("{}", value.abs()), separator);
    if scale > 0 {
        out.push(decimal_point);
        out.extend(std::iter::repeat('0').take(scale as usize));
    }
    out
}

fn sign_of(value: f64) -> &'static str {
    if value < 0.0 { "-" } else { "" }
}

/// Formats `value` as US dollars: `$125,000.00`.
pub fn format_currency(value: f64) -> String {
    format_money(value, iso::USD)
}

/// Formats `value` in the ISO 4217 currency `code`, falling back to USD for unknown codes.
pub fn format_currency_in(value: f64, code: &str) -> String {
    let currency = iso::find(code).unwrap_or_else(|| {
        warn!("Unknown currency code '{}', using USD", code);
        iso::USD
    });
    format_money(value, currency)
}

fn format_money(value: f64, currency: &'static iso::Currency) -> String {
    match fixed(value, currency.exponent) {
        Some(amount) => Money::from_decimal(amount, currency).to_string(),
        None => {
            let format = LocalFormat::from_locale(currency.locale);
            let amount = wide_amount(value, currency.exponent, format.digit_separator, format.exponent_separator);
            if currency.symbol_first {
                format!("{}{}{}", sign_of(value), currency.symbol, amount)
            } else {
                format!("{}{}{}", sign_of(value), amount, currency.symbol)
            }
        }
    }
}

/// Formats `value` with one fraction digit and a percent sign: `3.2%`.
pub fn format_percentage(value: f64) -> String {
    match fixed(value, PERCENTAGE_FRACTION_DIGITS) {
        Some(amount) => format!("{}%", amount),
        None => format!("{}{}.0%", sign_of(value), value.abs()),
    }
}

/// Like [`format_percentage`] but positive values carry an explicit `+`.
pub fn format_signed_percentage(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{}", sign, format_percentage(value))
}

/// Formats `value` with thousands grouping: `2,840`, `1,234.5`.
///
/// Integral values have no fraction digits; others keep up to
/// [`NUMBER_MAX_FRACTION_DIGITS`] with trailing zeros trimmed.
pub fn format_number(value: f64) -> String {
    let Some(amount) = to_decimal(value) else {
        return format!("{}{}", sign_of(value), wide_amount(value, 0, ',', '.'));
    };
    let amount = amount.round_dp(NUMBER_MAX_FRACTION_DIGITS).normalize();
    if amount.is_zero() {
        return "0".to_string();
    }

    let text = amount.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut out = String::new();
    if amount.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Formats an ISO date as `Aug 4`. Anything unparseable is returned as-is.
pub fn format_short_date(iso_date: &str) -> String {
    match NaiveDate::parse_from_str(iso_date, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d").to_string(),
        Err(_) => iso_date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("125000"), "125,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_format_currency() {
        let formatted = format_currency(125000.0);
        assert!(formatted.contains("125,000"), "{}", formatted);
        assert!(formatted.contains('$'), "{}", formatted);
        assert!(formatted.ends_with(".00"), "{}", formatted);

        assert!(format_currency(89.5).contains("89.50"));
        assert!(format_currency(0.0).contains("0.00"));
    }

    #[test]
    fn test_format_currency_rounds_intermediate_values() {
        // 125000 / 60 is what the first animation tick of the revenue card shows.
        let formatted = format_currency(125000.0 / 60.0);
        assert!(formatted.contains("2,083.33"), "{}", formatted);
    }

    #[test]
    fn test_format_currency_negative() {
        let formatted = format_currency(-150.0);
        assert!(formatted.contains('-'), "{}", formatted);
        assert!(formatted.contains("150.00"), "{}", formatted);
    }

    #[test]
    fn test_format_currency_in_unknown_code_falls_back_to_usd() {
        assert_eq!(format_currency_in(10.0, "NOPE"), format_currency(10.0));
        assert!(format_currency_in(10.0, "EUR").contains('€'));
    }

    #[test]
    fn test_format_percentage() {
        let formatted = format_percentage(3.2);
        assert!(formatted.ends_with('%'));
        assert!(formatted.contains("3.2"));
        assert_eq!(format_percentage(12.0), "12.0%");
        assert_eq!(format_percentage(0.04), "0.0%");
        assert_eq!(format_percentage(-2.1), "-2.1%");
    }

    #[test]
    fn test_format_signed_percentage() {
        assert_eq!(format_signed_percentage(12.5), "+12.5%");
        assert_eq!(format_signed_percentage(-2.1), "-2.1%");
        assert_eq!(format_signed_percentage(0.0), "0.0%");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2840.0), "2,840");
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(1234.567), "1,234.57");
        assert_eq!(format_number(-1500.0), "-1,500");
        assert_eq!(format_number(35.0), "35");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.001), "0");
    }

    #[test]
    fn test_non_finite_does_not_panic() {
        assert_eq!(format_number(f64::NAN), "0");
        assert!(format_currency(f64::INFINITY).contains("0.00"));
    }

    #[test]
    fn test_values_beyond_decimal_range_keep_their_magnitude() {
        assert_eq!(format_number(1e29), "100,000,000,000,000,000,000,000,000,000");
        assert_eq!(format_number(-1e29), "-100,000,000,000,000,000,000,000,000,000");
        assert_eq!(format_currency(1e29), "$100,000,000,000,000,000,000,000,000,000.00");
        assert_eq!(format_currency(-1e29), "-$100,000,000,000,000,000,000,000,000,000.00");
        assert_eq!(format_percentage(1e29), "100000000000000000000000000000.0%");
        assert_eq!(format_signed_percentage(1e29), "+100000000000000000000000000000.0%");
    }

    #[test]
    fn test_tiny_values_render_as_zero() {
        assert_eq!(format_number(1e-30), "0");
        assert_eq!(format_percentage(-1e-30), "0.0%");
    }

    #[test]
    fn test_format_short_date() {
        assert_eq!(format_short_date("2024-08-04"), "Aug 4");
        assert_eq!(format_short_date("2024-07-28"), "Jul 28");
        assert_eq!(format_short_date("not a date"), "not a date");
    }
}
