//! Temporal normalization.
//!
//! Record stores hand back date/time fields either as native instants or
//! as ISO-8601 text. Everything downstream compares instants, so this
//! module is the single place where the loose form is converted: a field
//! that cannot be parsed is reported as absent, never as an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::Time;

/// A temporal field as it arrives from the record store: either a native
/// UTC instant or ISO-8601 text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemporalValue {
    /// Native instant.
    Instant(Time),
    /// ISO-8601 text, parsed lazily by [`TemporalValue::normalize`].
    Text(String),
}

impl TemporalValue {
    /// Normalize into a comparable instant.
    ///
    /// Accepts native instants unchanged; parses ISO-8601 text with or
    /// without an offset (naive values are taken as UTC), and bare dates
    /// as midnight UTC. Returns `None` for malformed text.
    pub fn normalize(&self) -> Option<Time> {
        match self {
            TemporalValue::Instant(t) => Some(*t),
            TemporalValue::Text(s) => parse_iso8601(s.trim()),
        }
    }
}

impl From<Time> for TemporalValue {
    fn from(t: Time) -> Self {
        TemporalValue::Instant(t)
    }
}

fn parse_iso8601(s: &str) -> Option<Time> {
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }
    None
}

/// Fixed `"YYYY-MM"` aggregation key for an instant.
///
/// Month keys are derived from the normalized instant only, so two records
/// in the same calendar month always land in the same bucket.
pub fn month_key(t: Time) -> String {
    t.format("%Y-%m").to_string()
}

/// Whole days from `earlier` to `later` (negative if `later` precedes
/// `earlier`). Floors toward negative infinity, so a deficit of even an
/// hour already counts as a full day behind: 36 hours ahead is 1 day,
/// 36 hours behind is -2.
pub fn whole_days_between(later: Time, earlier: Time) -> i64 {
    later
        .signed_duration_since(earlier)
        .num_seconds()
        .div_euclid(86_400)
}
