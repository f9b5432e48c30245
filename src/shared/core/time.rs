// Time helpers shared by every use case.
//
// Responsibilities
// - Read client supplied ISO-8601 timestamps, falling back to the server clock.
// - Keep every timestamp at whole second precision so durations are exact and the
//   stored strings sort chronologically.

use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// Parse `raw` as an ISO-8601 timestamp. A trailing `Z` is the same as `+00:00`, other
/// offsets are converted to UTC and a timestamp without an offset is read as UTC.
/// Missing, blank or malformed input yields `fallback`.
pub fn parse_timestamp(raw: Option<&str>, fallback: DateTime<Utc>) -> DateTime<Utc> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(parse_iso)
        .map(|timestamp| timestamp.trunc_subsecs(0))
        .unwrap_or(fallback)
}

fn parse_iso(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Whole seconds from `started_at` to `ended_at`, truncated. Negative when the end
/// precedes the start; callers decide whether that is acceptable.
pub fn duration_seconds(started_at: DateTime<Utc>, ended_at: DateTime<Utc>) -> i64 {
    (ended_at - started_at).num_seconds()
}
