use crate::libs::formatter::{format_clock, format_minutes, format_optional_minutes};
use crate::libs::record::{ClockEntry, DayRecord};
use crate::libs::summary::PeriodSummary;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn entries(entries: &[ClockEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "CLOCK IN", "CLOCK OUT", "DURATION"]);
        for entry in entries {
            table.add_row(row![
                entry.id,
                format_clock(Some(entry.clock_in)),
                format_clock(entry.clock_out),
                format_optional_minutes(entry.duration)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn history(records: &[DayRecord]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "SESSIONS", "FIRST IN", "LAST OUT", "TOTAL"]);
        for record in records {
            let first_in = record.entries.first().map(|e| e.clock_in);
            let last_out = record.entries.iter().rev().find_map(|e| e.clock_out);
            table.add_row(row![
                record.date,
                record.entries.len(),
                format_clock(first_in),
                format_clock(last_out),
                format_minutes(record.total_work_duration)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn summary(summary: &PeriodSummary) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["WORK DAYS", "TOTAL", "AVERAGE"]);
        table.add_row(row![
            summary.work_days,
            format_minutes(summary.total_duration),
            format_minutes(summary.average_duration)
        ]);
        table.printstd();

        Ok(())
    }
}
