//! Record store abstraction.
//!
//! The tracker and the summary views only need get/put-by-day semantics, so
//! every storage backend (SQLite, JSON file) implements this one trait and
//! the deployment configuration picks which adapter to open.
//!
//! Stores are expected to make `put` a single atomic write for one record;
//! the single-active-entry invariant relies on that boundary when two clock
//! actions for the same day race.

use crate::libs::record::DayRecord;
use anyhow::Result;
use chrono::NaiveDate;

pub trait RecordStore {
    /// The record for one subject and date, if any.
    fn fetch(&mut self, subject: &str, date: NaiveDate) -> Result<Option<DayRecord>>;

    /// Inserts or replaces a record. Assigns `record.id` on first insert.
    fn put(&mut self, record: &mut DayRecord) -> Result<()>;

    /// Records whose date falls within `[start, end]` inclusive, ordered by date.
    fn fetch_range(&mut self, subject: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<DayRecord>>;
}
