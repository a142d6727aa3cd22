#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use punchcard::libs::formatter::{format_clock, format_minutes, format_minutes_human, format_optional_minutes};

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(480), "08:00");
        assert_eq!(format_minutes(90), "01:30");
        assert_eq!(format_minutes(45), "00:45");
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(-30), "00:00");
        assert_eq!(format_minutes(1440), "24:00");
    }

    #[test]
    fn test_format_minutes_human() {
        assert_eq!(format_minutes_human(510), "8h 30m");
        assert_eq!(format_minutes_human(480), "8h");
        assert_eq!(format_minutes_human(45), "45m");
        assert_eq!(format_minutes_human(0), "0m");
    }

    #[test]
    fn test_format_optional_minutes() {
        assert_eq!(format_optional_minutes(Some(75)), "01:15");
        assert_eq!(format_optional_minutes(None), "--:--");
    }

    #[test]
    fn test_format_clock() {
        let at = NaiveDate::from_ymd_opt(2025, 1, 27).unwrap().and_hms_opt(9, 5, 30).unwrap();
        assert_eq!(format_clock(Some(at)), "09:05");
        assert_eq!(format_clock(None), "-");
    }
}
