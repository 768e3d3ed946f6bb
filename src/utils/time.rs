//! Time utilities: parsing ledger timestamps, shift durations, formatting.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate, NaiveDateTime};

/// Format used when writing timestamps back to the ledger.
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_FMT: &str = "%Y-%m-%d";

const ACCEPTED_FMTS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Lenient parse: anything that is not a known timestamp shape yields `None`.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    ACCEPTED_FMTS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT).ok()
}

/// Parse the `--at` override, or fall back to the current local time.
pub fn resolve_now(at: Option<&String>) -> AppResult<NaiveDateTime> {
    match at {
        Some(s) => parse_timestamp(s).ok_or_else(|| AppError::InvalidTimestamp(s.to_string())),
        None => Ok(now()),
    }
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FMT).to_string()
}

/// Elapsed hours between two instants, rounded to 2 decimals.
/// No bounds check: a clock-out before the clock-in gives a negative value.
pub fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    let millis = (end - start).num_milliseconds() as f64;
    round2(millis / 3_600_000.0)
}

/// Two-decimal rounding, ties to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
