use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Strict parse of the due-date strings the front-end sends.
///
/// Tries the formats in order of how specific they are. A bare date is
/// anchored at midnight UTC so it compares before any timestamp on the
/// same day.
pub fn parse_due_date(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return Err(anyhow!("Empty due date string"));
    }

    // 1. Full RFC 3339 timestamp (what `new Date().toISOString()` emits)
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    // 2. Date-time without offset
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.and_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.and_utc());
    }

    // 3. Bare calendar date
    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(d.and_hms_opt(0, 0, 0).unwrap().and_utc());
    }

    Err(anyhow!("Could not parse due date: {}", input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_bare_date() {
        let dt = parse_due_date("2025-12-31").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_datetime_variants() {
        let expected = Utc.with_ymd_and_hms(2025, 7, 1, 9, 30, 0).unwrap();
        assert_eq!(parse_due_date("2025-07-01T09:30:00").unwrap(), expected);
        assert_eq!(parse_due_date("2025-07-01 09:30:00").unwrap(), expected);
        assert_eq!(parse_due_date("2025-07-01T09:30:00Z").unwrap(), expected);
    }

    #[test]
    fn test_parse_rfc3339_offset_normalized_to_utc() {
        let dt = parse_due_date("2025-07-01T09:30:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 7, 1, 7, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_due_date("not-a-date").is_err());
        assert!(parse_due_date("31-12-2025").is_err()); // wrong field order
        assert!(parse_due_date("").is_err());
        assert!(parse_due_date("   ").is_err());
        assert!(parse_due_date("2025-13-01").is_err()); // no 13th month
    }
}
