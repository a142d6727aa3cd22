//! Clock action orchestration.
//!
//! The tracker validates the requested transition against today's record,
//! computes durations on clock-out, and writes the updated record back
//! through the injected store. Each call either fully succeeds or leaves the
//! store untouched; there is no partially-applied state.

use crate::libs::clock::Clock;
use crate::libs::duration::{self, IntervalAnomaly};
use crate::libs::error::{TrackerError, TrackerResult};
use crate::libs::record::{ClockEntry, ClockStatus, DayRecord, EntryStatus};
use crate::libs::store::RecordStore;
use chrono::{NaiveDate, NaiveDateTime};
use tracing::warn;

/// Result of a successful clock-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockIn {
    pub entry_id: i64,
    pub clock_in: NaiveDateTime,
}

/// Result of a successful clock-out.
///
/// `duration` is absent when the interval was anomalous; the anomaly that
/// withheld it is carried alongside for the caller to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockOut {
    pub entry_id: i64,
    /// Date of the record the entry belongs to. Differs from today's date
    /// when an overnight session from yesterday was closed.
    pub date: NaiveDate,
    pub duration: Option<i64>,
    pub anomaly: Option<IntervalAnomaly>,
}

/// Today's full derived state, for status views.
#[derive(Debug, Clone, PartialEq)]
pub struct TodayStatus {
    pub date: NaiveDate,
    pub status: ClockStatus,
    pub active: Option<ClockEntry>,
    pub entries: Vec<ClockEntry>,
    pub total_work_duration: i64,
}

pub struct Tracker<'a> {
    store: &'a mut dyn RecordStore,
    clock: &'a dyn Clock,
    subject: String,
}

impl<'a> Tracker<'a> {
    pub fn new(store: &'a mut dyn RecordStore, clock: &'a dyn Clock, subject: impl Into<String>) -> Self {
        Self {
            store,
            clock,
            subject: subject.into(),
        }
    }

    /// Opens a new entry in today's record.
    ///
    /// Creates the record on the first clock-in of the day. Fails with
    /// `AlreadyClockedIn` while any entry is still open.
    pub fn clock_in(&mut self) -> TrackerResult<ClockIn> {
        let now = self.clock.now();
        let today = now.date();

        let mut record = self
            .store
            .fetch(&self.subject, today)?
            .unwrap_or_else(|| DayRecord::new(today, &self.subject, now));

        if record.entries.active_entry().is_some() {
            return Err(TrackerError::AlreadyClockedIn);
        }

        let entry = ClockEntry::open(record.next_entry_id(), now);
        let entry_id = entry.id;
        record.entries.push(entry);
        record.touch(now);
        self.store.put(&mut record)?;

        Ok(ClockIn {
            entry_id,
            clock_in: now,
        })
    }

    /// Closes the active entry and recomputes the day total.
    ///
    /// When today has no record at all but yesterday's record still holds an
    /// open entry, that session is closed instead under the overnight rule.
    /// Fails with `NoActiveEntry` when nothing is open.
    pub fn clock_out(&mut self) -> TrackerResult<ClockOut> {
        let now = self.clock.now();
        let today = now.date();

        match self.store.fetch(&self.subject, today)? {
            Some(record) => self.close_active(record, now),
            None => {
                let yesterday = today.pred_opt().ok_or(TrackerError::NoActiveEntry)?;
                let record = self
                    .store
                    .fetch(&self.subject, yesterday)?
                    .ok_or(TrackerError::NoActiveEntry)?;
                self.close_active(record, now)
            }
        }
    }

    /// Today's status, derived from the stored entries. Read-only.
    pub fn today_status(&mut self) -> TrackerResult<TodayStatus> {
        let today = self.clock.today();
        let record = self.store.fetch(&self.subject, today)?;

        Ok(match record {
            Some(record) => TodayStatus {
                date: today,
                status: record.entries.derive_status(),
                active: record.entries.active_entry().cloned(),
                total_work_duration: record.total_work_duration,
                entries: record.entries,
            },
            None => TodayStatus {
                date: today,
                status: ClockStatus::NotClockedIn,
                active: None,
                entries: Vec::new(),
                total_work_duration: 0,
            },
        })
    }

    fn close_active(&mut self, mut record: DayRecord, now: NaiveDateTime) -> TrackerResult<ClockOut> {
        let position = record
            .entries
            .iter()
            .position(|e| e.is_active())
            .ok_or(TrackerError::NoActiveEntry)?;

        let entry = &mut record.entries[position];
        let (minutes, anomaly) = match duration::between(entry.clock_in, now) {
            Ok(minutes) => (Some(minutes), None),
            Err(anomaly) => {
                warn!(
                    subject = %self.subject,
                    date = %record.date,
                    entry_id = entry.id,
                    %anomaly,
                    "interval anomaly, duration left unset"
                );
                (None, Some(anomaly))
            }
        };

        entry.clock_out = Some(now);
        entry.duration = minutes;
        let entry_id = entry.id;

        record.recompute_total();
        record.touch(now);
        self.store.put(&mut record)?;

        Ok(ClockOut {
            entry_id,
            date: record.date,
            duration: minutes,
            anomaly,
        })
    }
}
