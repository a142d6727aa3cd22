//! Data export for external analysis and backup.
//!
//! Writes a date range of day records to CSV (one row per clock entry) or
//! JSON (the records as stored). Output file names carry the exported range
//! unless an explicit path is given.

use crate::libs::formatter::format_minutes;
use crate::libs::record::DayRecord;
use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, one row per clock entry.
    Csv,
    /// The day records serialized as stored.
    Json,
}

/// One CSV row: a single clock entry with its day context.
#[derive(Debug, Serialize)]
struct ExportRow {
    date: String,
    entry: i64,
    clock_in: String,
    clock_out: String,
    duration_minutes: String,
    day_total: String,
}

pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Self { format, output }
    }

    /// Writes the records and returns the path of the created file.
    pub fn export(&self, records: &[DayRecord], start: NaiveDate, end: NaiveDate) -> Result<PathBuf> {
        let path = self
            .output
            .clone()
            .unwrap_or_else(|| default_file_name(self.format, start, end));

        match self.format {
            ExportFormat::Csv => write_csv(&path, records)?,
            ExportFormat::Json => write_json(&path, records)?,
        }

        Ok(path)
    }
}

fn default_file_name(format: ExportFormat, start: NaiveDate, end: NaiveDate) -> PathBuf {
    let extension = match format {
        ExportFormat::Csv => "csv",
        ExportFormat::Json => "json",
    };
    PathBuf::from(format!("punchcard_{}_{}.{}", start, end, extension))
}

fn write_csv(path: &PathBuf, records: &[DayRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for record in records {
        for entry in &record.entries {
            writer.serialize(ExportRow {
                date: record.date.to_string(),
                entry: entry.id,
                clock_in: entry.clock_in.format("%Y-%m-%d %H:%M:%S").to_string(),
                clock_out: entry
                    .clock_out
                    .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or_default(),
                duration_minutes: entry.duration.map(|d| d.to_string()).unwrap_or_default(),
                day_total: format_minutes(record.total_work_duration),
            })?;
        }
    }
    writer.flush()?;

    Ok(())
}

fn write_json(path: &PathBuf, records: &[DayRecord]) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(records)?)?;
    Ok(())
}
