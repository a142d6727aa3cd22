//! Typed errors for clock actions.
//!
//! `AlreadyClockedIn` and `NoActiveEntry` are user-recoverable and surfaced
//! as messages by the command layer; store failures pass through unmodified.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("already clocked in")]
    AlreadyClockedIn,

    #[error("no active clock-in entry")]
    NoActiveEntry,

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

pub type TrackerResult<T> = Result<T, TrackerError>;
