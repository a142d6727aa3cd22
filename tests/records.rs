#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use punchcard::db::records::Records;
    use punchcard::libs::record::{ClockEntry, DayRecord};
    use punchcard::libs::store::RecordStore;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct RecordsTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for RecordsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            RecordsTestContext { _temp_dir: temp_dir }
        }
    }

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    fn sample_record(d: u32) -> DayRecord {
        let date = NaiveDate::from_ymd_opt(2025, 6, d).unwrap();
        let now = dt(2025, 6, d, 17, 0);
        let mut record = DayRecord::new(date, "default", now);
        record.entries.push(ClockEntry {
            id: 1,
            clock_in: dt(2025, 6, d, 9, 0),
            clock_out: Some(dt(2025, 6, d, 17, 0)),
            duration: Some(480),
        });
        record.recompute_total();
        record
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_put_and_fetch_roundtrip(_ctx: &mut RecordsTestContext) {
        let mut records = Records::new().unwrap();
        let mut record = sample_record(1);

        records.put(&mut record).unwrap();
        assert!(record.id > 0);

        let fetched = records
            .fetch("default", NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(fetched, record);
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_fetch_nonexistent_record(_ctx: &mut RecordsTestContext) {
        let mut records = Records::new().unwrap();
        let fetched = records
            .fetch("default", NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
            .unwrap();
        assert!(fetched.is_none());
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_put_updates_existing_record(_ctx: &mut RecordsTestContext) {
        let mut records = Records::new().unwrap();
        let mut record = sample_record(1);
        records.put(&mut record).unwrap();
        let first_id = record.id;

        record.entries.push(ClockEntry::open(2, dt(2025, 6, 1, 18, 0)));
        record.touch(dt(2025, 6, 1, 18, 0));
        records.put(&mut record).unwrap();
        assert_eq!(record.id, first_id);

        let fetched = records
            .fetch("default", NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(fetched.entries.len(), 2);
        assert_eq!(fetched.updated_at, dt(2025, 6, 1, 18, 0));
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_open_entry_survives_roundtrip(_ctx: &mut RecordsTestContext) {
        let mut records = Records::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let mut record = DayRecord::new(date, "default", dt(2025, 6, 2, 9, 0));
        record.entries.push(ClockEntry::open(1, dt(2025, 6, 2, 9, 0)));
        records.put(&mut record).unwrap();

        let fetched = records.fetch("default", date).unwrap().unwrap();
        assert!(fetched.entries[0].is_active());
        assert_eq!(fetched.entries[0].duration, None);
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_fetch_range_orders_by_date(_ctx: &mut RecordsTestContext) {
        let mut records = Records::new().unwrap();
        for d in [3, 1, 2] {
            records.put(&mut sample_record(d)).unwrap();
        }

        let fetched = records
            .fetch_range(
                "default",
                NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            )
            .unwrap();
        assert_eq!(fetched.len(), 3);
        assert!(fetched.windows(2).all(|pair| pair[0].date < pair[1].date));
        assert_eq!(fetched[0].entries.len(), 1);
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_fetch_range_filters_subject(_ctx: &mut RecordsTestContext) {
        let mut records = Records::new().unwrap();
        records.put(&mut sample_record(1)).unwrap();

        let mut other = sample_record(2);
        other.subject = "alice".to_string();
        records.put(&mut other).unwrap();

        let fetched = records
            .fetch_range(
                "alice",
                NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            )
            .unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].subject, "alice");
    }
}
