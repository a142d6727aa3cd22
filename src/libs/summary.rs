//! Period summaries over day records.

use crate::libs::record::DayRecord;
use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::Serialize;

/// Aggregated totals over a contiguous date range. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodSummary {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Total worked minutes over the period.
    pub total_duration: i64,
    /// Average worked minutes per work day, rounded to the nearest minute.
    pub average_duration: i64,
    /// Days with a positive work total.
    pub work_days: usize,
}

impl PeriodSummary {
    /// Summarizes the records whose date falls within `[start, end]` inclusive.
    ///
    /// Only days with a positive total count as work days; an empty period
    /// yields all zeroes rather than a division fault.
    pub fn over(records: &[DayRecord], start: NaiveDate, end: NaiveDate) -> Self {
        let worked: Vec<&DayRecord> = records
            .iter()
            .filter(|r| r.date >= start && r.date <= end)
            .filter(|r| r.total_work_duration > 0)
            .collect();

        let work_days = worked.len();
        let total_duration: i64 = worked.iter().map(|r| r.total_work_duration).sum();
        let average_duration = if work_days > 0 {
            (total_duration + work_days as i64 / 2) / work_days as i64
        } else {
            0
        };

        Self {
            start,
            end,
            total_duration,
            average_duration,
            work_days,
        }
    }
}

/// The Monday-start week containing `today`.
pub fn week_of(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
    (monday, monday + Duration::days(6))
}

/// The calendar month containing `today`.
pub fn month_of(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = today.with_day(1).unwrap_or(today);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(today);
    (first, last)
}

/// A rolling window of exactly `days` calendar days ending at `today`.
pub fn last_days(today: NaiveDate, days: u32) -> (NaiveDate, NaiveDate) {
    let days = days.max(1);
    (today - Duration::days(i64::from(days) - 1), today)
}
