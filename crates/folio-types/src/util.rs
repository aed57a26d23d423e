use chrono::{DateTime, NaiveDate, Utc};

/// Parse an ISO-8601 date string into a sortable instant.
///
/// Accepts full RFC 3339 timestamps and bare `YYYY-MM-DD` dates (which map
/// to midnight UTC). Returns `None` for anything else so callers can order
/// unparseable dates deterministically instead of inheriting "now".
pub fn parse_iso_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_timestamps() {
        let parsed = parse_iso_date("2024-05-01T12:30:00Z").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-05-01T12:30:00+00:00");
    }

    #[test]
    fn parses_bare_dates_as_midnight_utc() {
        let parsed = parse_iso_date("2024-05-01").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-05-01T00:00:00+00:00");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_iso_date("yesterday").is_none());
        assert!(parse_iso_date("").is_none());
    }

    #[test]
    fn offset_timestamps_normalize_to_utc() {
        let parsed = parse_iso_date("2024-05-01T02:00:00+02:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-05-01T00:00:00+00:00");
    }
}
