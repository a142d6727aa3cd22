//! Clock-in/clock-out command.

use crate::{
    libs::{
        clock::{Clock, SystemClock},
        config::Config,
        error::TrackerError,
        formatter::format_minutes_human,
        messages::Message,
        tracker::Tracker,
        view::View,
    },
    msg_error, msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, ValueEnum};

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClockAction {
    In,
    Out,
}

#[derive(Debug, Args)]
pub struct ClockArgs {
    #[arg(value_enum)]
    action: ClockAction,
    /// Show today's entries instead of recording an event
    #[arg(short, long)]
    show: bool,
}

pub fn cmd(clock_args: ClockArgs) -> Result<()> {
    let config = Config::read()?;
    let mut store = config.open_store()?;
    let clock = SystemClock;
    let mut tracker = Tracker::new(store.as_mut(), &clock, config.subject());

    if clock_args.show {
        let status = tracker.today_status()?;
        View::entries(&status.entries)?;
        return Ok(());
    }

    match clock_args.action {
        ClockAction::In => match tracker.clock_in() {
            Ok(punch) => {
                msg_success!(Message::ClockedIn(punch.clock_in.format("%H:%M").to_string()));
            }
            Err(TrackerError::AlreadyClockedIn) => msg_error!(Message::AlreadyClockedIn),
            Err(e) => return Err(e.into()),
        },
        ClockAction::Out => match tracker.clock_out() {
            Ok(punch) => {
                if punch.date != clock.today() {
                    msg_info!(Message::OvernightClockOut(punch.date.to_string()));
                }
                let time = clock.now().format("%H:%M").to_string();
                match punch.duration {
                    Some(minutes) => {
                        msg_success!(Message::ClockedOut(time, format_minutes_human(minutes)));
                    }
                    None => {
                        if let Some(anomaly) = punch.anomaly {
                            msg_warning!(Message::IntervalAnomaly(anomaly.to_string()));
                        }
                        msg_success!(Message::ClockedOutNoDuration(time));
                    }
                }
            }
            Err(TrackerError::NoActiveEntry) => msg_error!(Message::NoActiveEntry),
            Err(e) => return Err(e.into()),
        },
    }

    Ok(())
}
