//! Display formatting for the backend's timestamps

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// `2024-03-15T14:02:26.123Z` or `2024-03-15 14:02:26` -> `15/03/2024 14:02`.
/// Anything unparsable is shown as received.
pub fn format_datetime(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%Y %H:%M").to_string();
    }
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format("%d/%m/%Y %H:%M").to_string();
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%d/%m/%Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15/03/2024 14:02");
        assert_eq!(format_datetime("2024-12-31 23:59:59"), "31/12/2024 23:59");
        assert_eq!(format_datetime("2024-03-15"), "15/03/2024");
    }

    #[test]
    fn test_unparsable_kept() {
        assert_eq!(format_datetime(""), "");
        assert_eq!(format_datetime("ayer"), "ayer");
    }
}
