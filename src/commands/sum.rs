//! Work time summaries over a period.
//!
//! Defaults to the current calendar month; `--week`, `--days N`, or an
//! explicit `--from`/`--to` range select other windows. All windows reduce
//! to the same range summary.

use crate::{
    libs::{
        clock::{Clock, SystemClock},
        config::Config,
        messages::Message,
        summary::{self, PeriodSummary},
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct SumArgs {
    /// Summarize the current week (Monday start)
    #[arg(long, conflicts_with_all = ["days", "from", "to"])]
    week: bool,
    /// Summarize the last N days
    #[arg(long, value_name = "N", conflicts_with_all = ["from", "to"])]
    days: Option<u32>,
    /// Period start (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    from: Option<NaiveDate>,
    /// Period end (YYYY-MM-DD), defaults to today
    #[arg(long, value_name = "DATE", requires = "from")]
    to: Option<NaiveDate>,
}

pub fn cmd(sum_args: SumArgs) -> Result<()> {
    let clock = SystemClock;
    let today = clock.today();

    let (start, end) = if let Some(from) = sum_args.from {
        (from, sum_args.to.unwrap_or(today))
    } else if let Some(days) = sum_args.days {
        summary::last_days(today, days)
    } else if sum_args.week {
        summary::week_of(today)
    } else {
        summary::month_of(today)
    };

    if start > end {
        msg_bail_anyhow!(Message::InvalidDateRange(start.to_string(), end.to_string()));
    }

    let config = Config::read()?;
    let mut store = config.open_store()?;
    let records = store.fetch_range(&config.subject(), start, end)?;
    let period = PeriodSummary::over(&records, start, end);

    msg_print!(Message::SummaryHeader(start.to_string(), end.to_string()), true);
    if period.work_days == 0 {
        msg_info!(Message::NoRecordsInRange);
    }
    View::summary(&period)?;

    Ok(())
}
