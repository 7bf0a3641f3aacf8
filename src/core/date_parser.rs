//! Git log date parsing
//!
//! Normalizes the fixed `YYYY-MM-DD HH:MM:SS +ZZZZ` form that git emits for
//! `--date=iso` into UTC instants.

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

use super::properties::{RevisionProperties, COMMIT_DATE_ISO_PROPERTY, COMMIT_DATE_PROPERTY};

const GIT_LOG_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Parse a date string in git's `--date=iso` log format.
pub fn parse_git_log_date(text: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_str(text.trim(), GIT_LOG_FORMAT)
        .map_err(|e| format!("Invalid git log date '{}': {}", text, e))
}

/// ISO-8601 instant string in UTC, e.g. `2023-06-01T10:00:00Z`.
pub fn to_iso_instant(dt: &DateTime<FixedOffset>) -> String {
    dt.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Commit time in epoch seconds, derived from the normalized ISO property
/// when present, falling back to the raw log date, then to epoch zero.
///
/// The extra ISO attempt on the raw value covers property sets merged from
/// dependencies that stored an instant string under `commitDate`.
pub fn commit_timestamp(props: &RevisionProperties) -> i64 {
    if let Some(iso) = props.get(COMMIT_DATE_ISO_PROPERTY) {
        if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
            return dt.timestamp();
        }
        log::warn!("Could not parse ISO date stamp '{}'", iso);
    }
    if let Some(raw) = props.get(COMMIT_DATE_PROPERTY) {
        if let Ok(dt) = parse_git_log_date(raw) {
            return dt.timestamp();
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return dt.timestamp();
        }
        log::warn!("Could not parse date stamp '{}'", raw);
    }
    0
}
