//! Display Formatting
//!
//! Price and timestamp formatting for the table, summary cards and charts.

use chrono::{DateTime, Utc};

use crate::constants::MISSING_VALUE;
use crate::domain::PriceValue;

/// Two-decimal price text; anything that doesn't parse shows as `"0.00"`
pub fn format_number(value: Option<&PriceValue>) -> String {
    format_f64(value.and_then(PriceValue::as_f64).unwrap_or(0.0))
}

/// Two-decimal text for a plain number, `"0.00"` for non-finite input
pub fn format_f64(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        "0.00".to_string()
    }
}

/// Clock time of an interval boundary (`HH:MM:SS`, UTC)
pub fn format_interval_time(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}

/// Truncate a string to max characters with ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars <= 1 {
        return s.chars().take(max_chars).collect();
    }
    let mut out: String = s.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_interval_time;

    fn text(s: &str) -> PriceValue {
        PriceValue::Text(s.to_string())
    }

    #[test]
    fn test_format_number_numeric_inputs() {
        assert_eq!(format_number(Some(&text("42.5"))), "42.50");
        assert_eq!(format_number(Some(&PriceValue::Number(23.456))), "23.46");
        assert_eq!(format_number(Some(&PriceValue::Number(-0.5))), "-0.50");
        assert_eq!(format_number(Some(&PriceValue::Number(7.0))), "7.00");
    }

    #[test]
    fn test_format_number_fallbacks() {
        assert_eq!(format_number(Some(&text("abc"))), "0.00");
        assert_eq!(format_number(None), "0.00");
        assert_eq!(format_number(Some(&PriceValue::Number(f64::NAN))), "0.00");
        assert_eq!(format_number(Some(&PriceValue::Other(serde_json::json!({"x": 1})))), "0.00");
        assert_eq!(format_f64(f64::NAN), "0.00");
    }

    #[test]
    fn test_format_number_idempotent() {
        for raw in ["42.50", "0.00", "-12.30", "1234.99"] {
            let once = format_number(Some(&text(raw)));
            assert_eq!(once, raw);
            assert_eq!(format_number(Some(&text(&once))), once);
        }
    }

    #[test]
    fn test_format_interval_time() {
        let dt = parse_interval_time("2025-03-01T14:05:09").expect("valid");
        assert_eq!(format_interval_time(Some(&dt)), "14:05:09");
        assert_eq!(format_interval_time(None), "--");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("ALTW.ALTW", 20), "ALTW.ALTW");
        assert_eq!(truncate("MINNESOTA.HUB.LONG", 8), "MINNESO…");
        assert_eq!(truncate("ÄÖÜäöü", 3), "ÄÖ…");
    }
}
