//! Online-status evaluation for availability windows.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Naive layouts accepted in addition to RFC 3339. Interpreted as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Returns whether a profile is online at `now`.
///
/// Both bounds are inclusive. A missing bound means offline.
pub fn is_online(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> bool {
    match (start, end) {
        (Some(start), Some(end)) => start <= now && now <= end,
        _ => false,
    }
}

/// Same as [`is_online`] for raw timestamp strings as stored by the
/// profile backend. Unparseable values count as missing.
pub fn is_online_raw(start: Option<&str>, end: Option<&str>, now: DateTime<Utc>) -> bool {
    is_online(
        start.and_then(parse_timestamp),
        end.and_then(parse_timestamp),
        now,
    )
}

/// Parses a stored timestamp.
///
/// Accepts RFC 3339, the Postgres `timestamptz` text layout
/// (`2025-01-05 12:00:00+00`), and offset-less timestamps, which are read
/// as UTC. Returns `None` for anything else.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Ok(parsed) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(parsed.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}
