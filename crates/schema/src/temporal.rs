//! Strict date and datetime literal parsing.
//!
//! Directive arguments carry temporal bounds as strings, and only the
//! canonical forms are accepted: `YYYY-MM-DD` for dates and
//! `YYYY-MM-DDTHH:MM:SS.SSSZ` (millisecond precision, UTC designator) for
//! instants. A literal parses only if re-serializing the parsed value
//! reproduces it exactly, so non-canonical spellings ("2020-2-9") and
//! out-of-range components ("2020-02-30") are both rejected.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Canonical date form: `YYYY-MM-DD`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical instant form: `YYYY-MM-DDTHH:MM:SS.SSSZ`.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Parses a strict `YYYY-MM-DD` literal into a calendar date.
#[must_use]
pub fn parse_date(literal: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(literal, DATE_FORMAT).ok()?;
    (date.format(DATE_FORMAT).to_string() == literal).then_some(date)
}

/// Parses a strict `YYYY-MM-DDTHH:MM:SS.SSSZ` literal into a UTC instant.
#[must_use]
pub fn parse_date_time(literal: &str) -> Option<DateTime<Utc>> {
    let instant = NaiveDateTime::parse_from_str(literal, DATE_TIME_FORMAT)
        .ok()?
        .and_utc();
    (instant.format(DATE_TIME_FORMAT).to_string() == literal).then_some(instant)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_day_parses() {
        assert!(parse_date("2020-02-29").is_some());
    }

    #[test]
    fn invalid_calendar_date_rejected() {
        assert!(parse_date("2020-02-30").is_none());
        assert!(parse_date("2021-02-29").is_none());
        assert!(parse_date("2020-13-01").is_none());
    }

    #[test]
    fn non_canonical_date_rejected() {
        assert!(parse_date("2020-2-9").is_none());
        assert!(parse_date("2020-02-09 ").is_none());
        assert!(parse_date("2020/02/09").is_none());
    }

    #[test]
    fn date_with_time_suffix_rejected() {
        assert!(parse_date("2020-02-29T00:00:00.000Z").is_none());
    }

    #[test]
    fn canonical_instant_parses() {
        let instant = parse_date_time("2020-02-29T00:00:00.000Z").unwrap();
        assert_eq!(
            instant.format(DATE_TIME_FORMAT).to_string(),
            "2020-02-29T00:00:00.000Z"
        );
    }

    #[test]
    fn instant_without_milliseconds_rejected() {
        assert!(parse_date_time("2020-02-29T00:00:00Z").is_none());
    }

    #[test]
    fn instant_without_utc_designator_rejected() {
        assert!(parse_date_time("2020-02-29T00:00:00.000").is_none());
        assert!(parse_date_time("2020-02-29T00:00:00.000+01:00").is_none());
    }

    #[test]
    fn bare_date_is_not_an_instant() {
        assert!(parse_date_time("2020-02-29").is_none());
    }

    #[test]
    fn instants_order_chronologically() {
        let earlier = parse_date_time("2020-01-01T00:00:00.000Z").unwrap();
        let later = parse_date_time("2020-01-01T00:00:00.001Z").unwrap();
        assert!(earlier < later);
    }
}
