#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use punchcard::libs::export::{ExportFormat, Exporter};
    use punchcard::libs::record::{ClockEntry, DayRecord};

    fn dt(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    fn sample_records() -> Vec<DayRecord> {
        let mut record = DayRecord::new(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(), "default", dt(1, 17));
        record.entries.push(ClockEntry {
            id: 1,
            clock_in: dt(1, 9),
            clock_out: Some(dt(1, 17)),
            duration: Some(480),
        });
        record.entries.push(ClockEntry::open(2, dt(1, 18)));
        record.recompute_total();
        vec![record]
    }

    #[test]
    fn test_csv_export_one_row_per_entry() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("out.csv");
        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();

        let path = Exporter::new(ExportFormat::Csv, Some(output.clone()))
            .export(&sample_records(), start, end)
            .unwrap();
        assert_eq!(path, output);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        // Header plus two entries.
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("clock_in"));
        assert!(lines[1].contains("2025-06-01 09:00:00"));
        assert!(lines[1].contains("480"));
        // The open entry has no clock-out and no duration.
        assert!(lines[2].contains("2025-06-01 18:00:00"));
    }

    #[test]
    fn test_json_export_roundtrips_records() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("out.json");
        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();

        let records = sample_records();
        Exporter::new(ExportFormat::Json, Some(output.clone()))
            .export(&records, start, end)
            .unwrap();

        let contents = std::fs::read_to_string(&output).unwrap();
        let parsed: Vec<DayRecord> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_default_file_name_carries_range() {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let temp_dir = tempfile::tempdir().unwrap();
        std::env::set_current_dir(temp_dir.path()).unwrap();

        let path = Exporter::new(ExportFormat::Csv, None)
            .export(&sample_records(), start, end)
            .unwrap();
        assert_eq!(path.to_string_lossy(), "punchcard_2025-06-01_2025-06-30.csv");
    }
}
