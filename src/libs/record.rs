//! Attendance data model: clock entries, day records, and status derivation.

use crate::libs::duration;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contiguous work session: a clock-in, and eventually a clock-out.
///
/// `duration` is derived, never authoritative. It is set only once the entry
/// is closed, and stays unset when the interval turns out to be anomalous
/// (clock skew, overnight span beyond 24 hours).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockEntry {
    pub id: i64,
    pub clock_in: NaiveDateTime,
    pub clock_out: Option<NaiveDateTime>,
    /// Worked minutes, present only for closed entries with a valid interval.
    pub duration: Option<i64>,
}

impl ClockEntry {
    pub fn open(id: i64, clock_in: NaiveDateTime) -> Self {
        Self {
            id,
            clock_in,
            clock_out: None,
            duration: None,
        }
    }

    /// An entry with a clock-in but no clock-out yet.
    pub fn is_active(&self) -> bool {
        self.clock_out.is_none()
    }
}

/// Today's derived work state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStatus {
    NotClockedIn,
    ClockedIn,
    ClockedOut,
}

impl fmt::Display for ClockStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            ClockStatus::NotClockedIn => "not clocked in",
            ClockStatus::ClockedIn => "clocked in",
            ClockStatus::ClockedOut => "clocked out",
        };
        write!(f, "{}", label)
    }
}

/// All entries for one subject on one calendar date.
///
/// Entries are kept in clock-in order. `total_work_duration` is recomputed
/// after every mutation and always equals the sum of closed-entry durations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Store-assigned identifier; zero until the record is first persisted.
    pub id: i64,
    pub date: NaiveDate,
    pub subject: String,
    pub entries: Vec<ClockEntry>,
    /// Sum of worked minutes over closed entries.
    pub total_work_duration: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl DayRecord {
    pub fn new(date: NaiveDate, subject: &str, now: NaiveDateTime) -> Self {
        Self {
            id: 0,
            date,
            subject: subject.to_string(),
            entries: Vec::new(),
            total_work_duration: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Next entry id within this record.
    pub fn next_entry_id(&self) -> i64 {
        self.entries.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }

    pub fn recompute_total(&mut self) {
        self.total_work_duration = duration::total_duration(&self.entries);
    }

    pub fn touch(&mut self, now: NaiveDateTime) {
        self.updated_at = now;
    }
}

/// Status derivation over an entry list.
///
/// Pure and read-only: safe to call repeatedly on any snapshot of entries.
pub trait EntryStatus {
    fn active_entry(&self) -> Option<&ClockEntry>;
    fn derive_status(&self) -> ClockStatus;
}

impl EntryStatus for [ClockEntry] {
    fn active_entry(&self) -> Option<&ClockEntry> {
        self.iter().find(|e| e.is_active())
    }

    fn derive_status(&self) -> ClockStatus {
        if self.active_entry().is_some() {
            ClockStatus::ClockedIn
        } else if !self.is_empty() {
            ClockStatus::ClockedOut
        } else {
            ClockStatus::NotClockedIn
        }
    }
}
