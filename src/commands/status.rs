//! Today's attendance status view.

use crate::{
    libs::{
        clock::SystemClock,
        config::Config,
        formatter::format_minutes,
        messages::Message,
        tracker::Tracker,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let mut store = config.open_store()?;
    let clock = SystemClock;
    let status = Tracker::new(store.as_mut(), &clock, config.subject()).today_status()?;

    msg_print!(Message::StatusHeader(status.date.to_string()), true);
    msg_print!(Message::StatusLine(status.status.to_string()));

    if status.entries.is_empty() {
        msg_info!(Message::NoEntriesToday);
        return Ok(());
    }

    View::entries(&status.entries)?;
    msg_print!(Message::TotalToday(format_minutes(status.total_work_duration)));

    Ok(())
}
