//! Display implementation for application messages.
//!
//! All user-facing text lives here, so wording stays consistent and the
//! message macros can route the same content to the console or to tracing.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            // Clock
            Message::ClockedIn(time) => format!("Clocked in at {}", time),
            Message::ClockedOut(time, worked) => format!("Clocked out at {} ({} worked)", time, worked),
            Message::ClockedOutNoDuration(time) => format!("Clocked out at {}, duration not recorded", time),
            Message::OvernightClockOut(date) => format!("Closed the open session from {}", date),
            Message::AlreadyClockedIn => "Already clocked in. Clock out before starting a new session".to_string(),
            Message::NoActiveEntry => "No active clock-in entry. Clock in first".to_string(),
            Message::IntervalAnomaly(reason) => format!("Duration withheld: {}", reason),

            // Status
            Message::StatusHeader(date) => format!("Attendance for {}", date),
            Message::StatusLine(status) => format!("Status: {}", status),
            Message::TotalToday(total) => format!("Total worked today: {}", total),
            Message::NoEntriesToday => "No clock events recorded today".to_string(),

            // Summary & history
            Message::SummaryHeader(start, end) => format!("Work summary {} to {}", start, end),
            Message::HistoryHeader(start, end) => format!("Attendance history {} to {}", start, end),
            Message::NoRecordsInRange => "No records in the selected period".to_string(),
            Message::InvalidDateRange(start, end) => format!("Invalid date range: {} is after {}", start, end),

            // Export
            Message::ExportCompleted(path) => format!("Records exported to {}", path),

            // Configuration
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::PromptStorageBackend => "Storage backend".to_string(),
            Message::PromptSubject => "User name for attendance records".to_string(),
        };
        write!(f, "{}", text)
    }
}
