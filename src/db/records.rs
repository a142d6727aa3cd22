//! SQLite record store.
//!
//! Day records and their clock entries live in two tables keyed by
//! `(subject, date)`. A `put` replaces the record and its entries inside one
//! transaction, which is the read-modify-write atomicity boundary the
//! tracker relies on.

use crate::db::db::Db;
use crate::libs::record::{ClockEntry, DayRecord};
use crate::libs::store::RecordStore;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

const SCHEMA_DAY_RECORDS: &str = "CREATE TABLE IF NOT EXISTS day_records (
    id INTEGER NOT NULL PRIMARY KEY,
    subject TEXT NOT NULL,
    date DATE NOT NULL,
    total_work_duration INTEGER NOT NULL DEFAULT 0,
    created_at TIMESTAMP NOT NULL,
    updated_at TIMESTAMP NOT NULL,
    UNIQUE(subject, date)
);";
const SCHEMA_CLOCK_ENTRIES: &str = "CREATE TABLE IF NOT EXISTS clock_entries (
    record_id INTEGER NOT NULL,
    entry_id INTEGER NOT NULL,
    clock_in TIMESTAMP NOT NULL,
    clock_out TIMESTAMP,
    duration INTEGER,
    PRIMARY KEY (record_id, entry_id),
    FOREIGN KEY (record_id) REFERENCES day_records(id) ON DELETE CASCADE
);";

const SELECT_RECORD: &str =
    "SELECT id, date, subject, total_work_duration, created_at, updated_at FROM day_records WHERE subject = ?1 AND date = ?2";
const SELECT_RANGE: &str =
    "SELECT id, date, subject, total_work_duration, created_at, updated_at FROM day_records WHERE subject = ?1 AND date BETWEEN ?2 AND ?3 ORDER BY date";
const INSERT_RECORD: &str =
    "INSERT INTO day_records (subject, date, total_work_duration, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_RECORD: &str = "UPDATE day_records SET total_work_duration = ?2, updated_at = ?3 WHERE id = ?1";
const DELETE_ENTRIES: &str = "DELETE FROM clock_entries WHERE record_id = ?1";
const INSERT_ENTRY: &str =
    "INSERT INTO clock_entries (record_id, entry_id, clock_in, clock_out, duration) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_ENTRIES: &str =
    "SELECT entry_id, clock_in, clock_out, duration FROM clock_entries WHERE record_id = ?1 ORDER BY entry_id";

pub struct Records {
    conn: Connection,
}

impl Records {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_DAY_RECORDS, [])?;
        db.conn.execute(SCHEMA_CLOCK_ENTRIES, [])?;
        Ok(Records { conn: db.conn })
    }

    fn fetch_entries(&self, record_id: i64) -> Result<Vec<ClockEntry>> {
        let mut stmt = self.conn.prepare(SELECT_ENTRIES)?;
        let entry_iter = stmt.query_map([record_id], |row| {
            Ok(ClockEntry {
                id: row.get(0)?,
                clock_in: row.get(1)?,
                clock_out: row.get(2)?,
                duration: row.get(3)?,
            })
        })?;

        let mut entries = vec![];
        for entry in entry_iter {
            entries.push(entry?);
        }
        Ok(entries)
    }
}

impl RecordStore for Records {
    fn fetch(&mut self, subject: &str, date: NaiveDate) -> Result<Option<DayRecord>> {
        let record = self
            .conn
            .query_row(SELECT_RECORD, params![subject, date], |row| {
                Ok(DayRecord {
                    id: row.get(0)?,
                    date: row.get(1)?,
                    subject: row.get(2)?,
                    entries: vec![],
                    total_work_duration: row.get(3)?,
                    created_at: row.get(4)?,
                    updated_at: row.get(5)?,
                })
            })
            .optional()?;

        match record {
            Some(mut record) => {
                record.entries = self.fetch_entries(record.id)?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    fn put(&mut self, record: &mut DayRecord) -> Result<()> {
        let transaction = self.conn.transaction()?;

        if record.id == 0 {
            transaction.execute(
                INSERT_RECORD,
                params![
                    record.subject,
                    record.date,
                    record.total_work_duration,
                    record.created_at,
                    record.updated_at
                ],
            )?;
            record.id = transaction.last_insert_rowid();
        } else {
            transaction.execute(
                UPDATE_RECORD,
                params![record.id, record.total_work_duration, record.updated_at],
            )?;
        }

        transaction.execute(DELETE_ENTRIES, params![record.id])?;
        for entry in &record.entries {
            transaction.execute(
                INSERT_ENTRY,
                params![record.id, entry.id, entry.clock_in, entry.clock_out, entry.duration],
            )?;
        }

        transaction.commit()?;
        Ok(())
    }

    fn fetch_range(&mut self, subject: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<DayRecord>> {
        let mut records = {
            let mut stmt = self.conn.prepare(SELECT_RANGE)?;
            let record_iter = stmt.query_map(params![subject, start, end], |row| {
                Ok(DayRecord {
                    id: row.get(0)?,
                    date: row.get(1)?,
                    subject: row.get(2)?,
                    entries: vec![],
                    total_work_duration: row.get(3)?,
                    created_at: row.get(4)?,
                    updated_at: row.get(5)?,
                })
            })?;

            let mut records = Vec::new();
            for record in record_iter {
                records.push(record?);
            }
            records
        };

        for record in &mut records {
            record.entries = self.fetch_entries(record.id)?;
        }
        Ok(records)
    }
}
