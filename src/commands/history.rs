//! Attendance history browsing.

use crate::{
    libs::{
        clock::{Clock, SystemClock},
        config::Config,
        messages::Message,
        summary,
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Range start (YYYY-MM-DD), defaults to the start of this month
    #[arg(long, value_name = "DATE")]
    from: Option<NaiveDate>,
    /// Range end (YYYY-MM-DD), defaults to the end of this month
    #[arg(long, value_name = "DATE")]
    to: Option<NaiveDate>,
}

pub fn cmd(history_args: HistoryArgs) -> Result<()> {
    let clock = SystemClock;
    let (month_start, month_end) = summary::month_of(clock.today());
    let start = history_args.from.unwrap_or(month_start);
    let end = history_args.to.unwrap_or(month_end);

    if start > end {
        msg_bail_anyhow!(Message::InvalidDateRange(start.to_string(), end.to_string()));
    }

    let config = Config::read()?;
    let mut store = config.open_store()?;
    let records = store.fetch_range(&config.subject(), start, end)?;

    msg_print!(Message::HistoryHeader(start.to_string(), end.to_string()), true);
    if records.is_empty() {
        msg_info!(Message::NoRecordsInRange);
        return Ok(());
    }
    View::history(&records)?;

    Ok(())
}
