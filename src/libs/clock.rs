//! Clock source abstraction.
//!
//! Everything that needs the current time takes a `&dyn Clock` instead of
//! calling `Local::now()` directly, so the tracker and the summary windows
//! can be tested against a frozen instant.

use chrono::{Local, NaiveDate, NaiveDateTime};
use std::cell::Cell;

pub trait Clock {
    /// Current instant as local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    /// Current calendar date in the local timezone.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// The real system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a fixed instant.
///
/// Used by tests to drive the tracker deterministically; `advance` moves the
/// frozen time forward between clock events.
#[derive(Debug)]
pub struct FixedClock {
    at: Cell<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self { at: Cell::new(at) }
    }

    pub fn set(&self, at: NaiveDateTime) {
        self.at.set(at);
    }

    pub fn advance(&self, delta: chrono::Duration) {
        self.at.set(self.at.get() + delta);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.at.get()
    }
}
