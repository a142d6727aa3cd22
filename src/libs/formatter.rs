//! Duration and timestamp formatting for console output and export.

use chrono::NaiveDateTime;

/// Formats whole minutes as "HH:MM". Negative values clamp to "00:00".
pub fn format_minutes(minutes: i64) -> String {
    let minutes = minutes.max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Formats whole minutes as a human-readable duration, e.g. "8h 30m".
pub fn format_minutes_human(minutes: i64) -> String {
    let minutes = minutes.max(0);
    let hours = minutes / 60;
    let mins = minutes % 60;
    match (hours, mins) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

/// Formats an optional duration, using a placeholder when it is unset.
pub fn format_optional_minutes(minutes: Option<i64>) -> String {
    match minutes {
        Some(m) => format_minutes(m),
        None => "--:--".to_string(),
    }
}

/// Formats a timestamp as "HH:MM", or "-" when absent.
pub fn format_clock(timestamp: Option<NaiveDateTime>) -> String {
    match timestamp {
        Some(t) => t.format("%H:%M").to_string(),
        None => "-".to_string(),
    }
}
