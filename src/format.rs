//! Display formatting. Every function here is total: bad input yields a
//! placeholder, never a panic.

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::analysis::ChartRef;
use crate::models::strip_enum_prefix;

pub const PLACEHOLDER: &str = "N/A";

/// Parse a backend decimal string. Scientific notation is tolerated since
/// the broker emits it for tiny crypto quantities.
pub fn parse_decimal(value: &str) -> Option<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(trimmed).ok())
}

fn fixed(value: Decimal, decimals: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimals);
    rounded.to_string()
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn grouped_fixed(value: Decimal, decimals: u32) -> String {
    let text = fixed(value.abs(), decimals);
    match text.split_once('.') {
        Some((int_part, frac_part)) => format!("{}.{frac_part}", group_thousands(int_part)),
        None => group_thousands(&text),
    }
}

/// US-style currency with two decimals: `"24274"` -> `"$24,274.00"`.
pub fn format_currency(value: &str) -> String {
    match parse_decimal(value) {
        Some(v) => {
            let sign = if v < Decimal::ZERO { "-" } else { "" };
            format!("{sign}${}", grouped_fixed(v, 2))
        }
        None => PLACEHOLDER.to_string(),
    }
}

/// Plain number with two decimals, used for order price badges.
pub fn format_price(value: &str) -> String {
    format_fixed(value, 2)
}

/// Share quantity with six decimals — fractional crypto positions need the
/// extra precision. Deliberately a distinct formatter from [`format_price`].
pub fn format_quantity(value: &str) -> String {
    format_fixed(value, 6)
}

fn format_fixed(value: &str, decimals: u32) -> String {
    match parse_decimal(value) {
        Some(v) => {
            let sign = if v < Decimal::ZERO { "-" } else { "" };
            format!("{sign}{}", grouped_fixed(v, decimals))
        }
        None => PLACEHOLDER.to_string(),
    }
}

/// Fraction scaled by hand to a percentage, with an explicit `+` on
/// non-negative values: `"0.0069"` -> `"+0.69%"`. The change-today column
/// uses this.
pub fn format_signed_percent(value: &str) -> String {
    match parse_decimal(value) {
        Some(v) => {
            let scaled = v * Decimal::ONE_HUNDRED;
            let sign = if scaled >= Decimal::ZERO { "+" } else { "-" };
            format!("{sign}{}%", grouped_fixed(scaled, 2))
        }
        None => PLACEHOLDER.to_string(),
    }
}

/// Locale-style percent of a raw fraction, no forced sign: `"0.0069"` ->
/// `"0.69%"`, `"-0.0059"` -> `"-0.59%"`. Kept separate from
/// [`format_signed_percent`] — the two render differently and are not
/// interchangeable.
pub fn format_locale_percent(value: &str) -> String {
    match parse_decimal(value) {
        Some(v) => {
            let scaled = v * Decimal::ONE_HUNDRED;
            let sign = if scaled < Decimal::ZERO { "-" } else { "" };
            format!("{sign}{}%", grouped_fixed(scaled, 2))
        }
        None => PLACEHOLDER.to_string(),
    }
}

/// `"PositionSide.LONG"` -> `"long"`. Idempotent.
pub fn format_side(raw: &str) -> String {
    strip_enum_prefix(raw).to_lowercase()
}

/// `"OrderStatus.NEW"` -> `"new"`. Idempotent.
pub fn format_status(raw: &str) -> String {
    strip_enum_prefix(raw).to_lowercase()
}

/// Render a calendar date as `YYYY-MM-DD` by component. The caller passes
/// the LOCAL calendar date; building the string from components (instead of
/// a UTC ISO timestamp truncation) is what keeps near-midnight dates from
/// shifting in non-UTC timezones.
pub fn format_date_for_query(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Short local timestamp for order rows: `"Aug 29, 13:49"`.
pub fn format_datetime_short(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%b %-d, %H:%M").to_string()
}

/// Full local timestamp for record headers.
pub fn format_datetime_local(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Resolve a chart reference against the records base URL. Absolute URLs
/// pass through untouched; relative paths are joined onto the base; missing
/// or empty references resolve to nothing.
pub fn resolve_chart_url(base_url: &str, chart: &ChartRef) -> Option<String> {
    match chart {
        ChartRef::Missing => None,
        ChartRef::Url(path) if path.is_empty() => None,
        ChartRef::Url(path) => {
            if path.starts_with("http://") || path.starts_with("https://") {
                Some(path.clone())
            } else {
                Some(format!("{base_url}/{path}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("24274"), "$24,274.00");
        assert_eq!(format_currency("86.92"), "$86.92");
        assert_eq!(format_currency("-0.585844"), "-$0.59");
        assert_eq!(format_currency("1234567.895"), "$1,234,567.90");
    }

    #[test]
    fn test_format_currency_bad_input_is_placeholder() {
        assert_eq!(format_currency("abc"), PLACEHOLDER);
        assert_eq!(format_currency(""), PLACEHOLDER);
        assert_eq!(format_currency("   "), PLACEHOLDER);
    }

    #[test]
    fn test_format_quantity_six_decimals() {
        assert_eq!(format_quantity("106"), "106.000000");
        assert_eq!(format_quantity("0.000084856"), "0.000085");
    }

    #[test]
    fn test_format_quantity_scientific() {
        assert_eq!(format_quantity("8.4856e-5"), "0.000085");
    }

    #[test]
    fn test_format_signed_percent() {
        assert_eq!(format_signed_percent("0.0069719541666734"), "+0.70%");
        assert_eq!(format_signed_percent("0"), "+0.00%");
        assert_eq!(format_signed_percent("-0.0137"), "-1.37%");
        assert_eq!(format_signed_percent("bogus"), PLACEHOLDER);
    }

    #[test]
    fn test_format_locale_percent_differs_on_sign() {
        assert_eq!(format_locale_percent("0.0069719541666734"), "0.70%");
        assert_eq!(format_locale_percent("-0.0059"), "-0.59%");
    }

    #[test]
    fn test_format_side_and_status_are_idempotent() {
        assert_eq!(format_side("PositionSide.LONG"), "long");
        assert_eq!(format_side("long"), "long");
        assert_eq!(format_status("OrderStatus.NEW"), "new");
        assert_eq!(format_status(&format_status("OrderStatus.HELD")), "held");
    }

    #[test]
    fn test_format_date_for_query_uses_components() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 29).unwrap();
        assert_eq!(format_date_for_query(date), "2025-08-29");

        // A local-midnight date never shifts: only the calendar components
        // are consulted, regardless of the machine's UTC offset.
        let new_year = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(format_date_for_query(new_year), "2026-01-01");
    }

    #[test]
    fn test_resolve_chart_url() {
        let base = "https://records.example.com";
        assert_eq!(
            resolve_chart_url(base, &ChartRef::Url("download/c.png".into())),
            Some("https://records.example.com/download/c.png".into())
        );
        assert_eq!(
            resolve_chart_url(base, &ChartRef::Url("https://cdn.example.com/c.png".into())),
            Some("https://cdn.example.com/c.png".into())
        );
        assert_eq!(resolve_chart_url(base, &ChartRef::Missing), None);
        assert_eq!(resolve_chart_url(base, &ChartRef::Url(String::new())), None);
    }
}
