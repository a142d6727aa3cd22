//! JSON-file record store.
//!
//! A single JSON blob holding every day record, the lightweight alternative
//! to the SQLite backend for deployments without a database. The whole file
//! is rewritten on every `put`, which keeps the read-modify-write of one
//! clock action atomic at the file level.

use crate::libs::data_storage::DataStorage;
use crate::libs::record::DayRecord;
use crate::libs::store::RecordStore;
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const STORE_FILE_NAME: &str = "records.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    last_record_id: i64,
    records: Vec<DayRecord>,
}

pub struct JsonRecordStore {
    path: PathBuf,
}

impl JsonRecordStore {
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(STORE_FILE_NAME)?;
        Ok(Self { path })
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> Result<StoreFile> {
        if !self.path.exists() {
            return Ok(StoreFile::default());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, file: &StoreFile) -> Result<()> {
        fs::write(&self.path, serde_json::to_string_pretty(file)?)?;
        Ok(())
    }
}

impl RecordStore for JsonRecordStore {
    fn fetch(&mut self, subject: &str, date: NaiveDate) -> Result<Option<DayRecord>> {
        let file = self.load()?;
        Ok(file
            .records
            .into_iter()
            .find(|r| r.subject == subject && r.date == date))
    }

    fn put(&mut self, record: &mut DayRecord) -> Result<()> {
        let mut file = self.load()?;

        if record.id == 0 {
            file.last_record_id += 1;
            record.id = file.last_record_id;
        }

        match file
            .records
            .iter()
            .position(|r| r.subject == record.subject && r.date == record.date)
        {
            Some(position) => file.records[position] = record.clone(),
            None => file.records.push(record.clone()),
        }

        self.save(&file)
    }

    fn fetch_range(&mut self, subject: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<DayRecord>> {
        let file = self.load()?;
        let mut records: Vec<DayRecord> = file
            .records
            .into_iter()
            .filter(|r| r.subject == subject && r.date >= start && r.date <= end)
            .collect();
        records.sort_by_key(|r| r.date);
        Ok(records)
    }
}
