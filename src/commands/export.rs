//! Record export command.

use crate::{
    libs::{
        clock::{Clock, SystemClock},
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
        summary,
    },
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(value_enum, default_value = "csv")]
    format: ExportFormat,
    /// Range start (YYYY-MM-DD), defaults to the start of this month
    #[arg(long, value_name = "DATE")]
    from: Option<NaiveDate>,
    /// Range end (YYYY-MM-DD), defaults to the end of this month
    #[arg(long, value_name = "DATE")]
    to: Option<NaiveDate>,
    /// Output file path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(export_args: ExportArgs) -> Result<()> {
    let clock = SystemClock;
    let (month_start, month_end) = summary::month_of(clock.today());
    let start = export_args.from.unwrap_or(month_start);
    let end = export_args.to.unwrap_or(month_end);

    if start > end {
        msg_bail_anyhow!(Message::InvalidDateRange(start.to_string(), end.to_string()));
    }

    let config = Config::read()?;
    let mut store = config.open_store()?;
    let records = store.fetch_range(&config.subject(), start, end)?;

    if records.is_empty() {
        msg_info!(Message::NoRecordsInRange);
        return Ok(());
    }

    let path = Exporter::new(export_args.format, export_args.output).export(&records, start, end)?;
    msg_success!(Message::ExportCompleted(path.display().to_string()));

    Ok(())
}
