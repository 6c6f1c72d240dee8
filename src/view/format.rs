//! Display formatting for money and timestamps

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// `NT$ 9.99`, `NT$ 10`; prints the number the way a JSON number reads
pub fn format_money(amount: f64) -> String {
    format!("NT$ {}", amount)
}

/// Calendar date as `YYYY/M/D`, or `-` when missing or unparseable
pub fn format_date(raw: Option<&str>) -> String {
    raw.and_then(parse_date)
        .map(|d| format!("{}/{}/{}", d.year(), d.month(), d.day()))
        .unwrap_or_else(|| "-".to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(9.99), "NT$ 9.99");
        assert_eq!(format_money(10.0), "NT$ 10");
        assert_eq!(format_money(0.0), "NT$ 0");
    }

    #[test]
    fn test_format_date_variants() {
        assert_eq!(format_date(Some("2024-01-01T00:00:00Z")), "2024/1/1");
        assert_eq!(format_date(Some("2023-11-05T14:30:00.123456")), "2023/11/5");
        assert_eq!(format_date(Some("2023-11-05")), "2023/11/5");
        assert_eq!(format_date(Some("yesterday")), "-");
        assert_eq!(format_date(None), "-");
    }
}
