//! Duration arithmetic for clock entries.
//!
//! Durations are whole minutes, floored from elapsed seconds. When an entry
//! crosses midnight the interval is split at the date boundary and the two
//! partial spans are summed, so a dangling entry closed days later never
//! accumulates the skipped calendar days.

use crate::libs::record::ClockEntry;
use chrono::{NaiveDateTime, Timelike};
use std::fmt;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Upper bound for an overnight session. Anything longer is treated as a
/// data anomaly rather than a valid duration.
pub const MAX_OVERNIGHT_MINUTES: i64 = 24 * 60;

/// Interval that must not be turned into a persisted duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalAnomaly {
    /// Clock-out precedes clock-in: clock skew or corrupted data.
    Negative,
    /// Overnight span computed to more than 24 hours.
    OvernightTooLong,
}

impl fmt::Display for IntervalAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let reason = match self {
            IntervalAnomaly::Negative => "clock-out is earlier than clock-in",
            IntervalAnomaly::OvernightTooLong => "overnight span exceeds 24 hours",
        };
        write!(f, "{}", reason)
    }
}

/// Worked minutes between a clock-in and a clock-out.
///
/// Same-day intervals are `floor(elapsed seconds / 60)`. Intervals whose
/// endpoints fall on different calendar dates use the overnight rule:
/// time from clock-in to midnight plus time from midnight to clock-out.
pub fn between(clock_in: NaiveDateTime, clock_out: NaiveDateTime) -> Result<i64, IntervalAnomaly> {
    if clock_out < clock_in {
        return Err(IntervalAnomaly::Negative);
    }

    if clock_in.date() == clock_out.date() {
        return Ok(clock_out.signed_duration_since(clock_in).num_seconds() / 60);
    }

    let to_midnight = SECONDS_PER_DAY - i64::from(clock_in.time().num_seconds_from_midnight());
    let past_midnight = i64::from(clock_out.time().num_seconds_from_midnight());
    let minutes = (to_midnight + past_midnight) / 60;

    if minutes > MAX_OVERNIGHT_MINUTES {
        return Err(IntervalAnomaly::OvernightTooLong);
    }
    Ok(minutes)
}

/// Sum of worked minutes over closed entries.
///
/// Entries without a clock-out are in progress and contribute zero, as do
/// closed entries whose duration was withheld as anomalous.
pub fn total_duration(entries: &[ClockEntry]) -> i64 {
    entries
        .iter()
        .filter(|e| e.clock_out.is_some())
        .filter_map(|e| e.duration)
        .sum()
}
