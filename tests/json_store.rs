#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use punchcard::libs::json_store::JsonRecordStore;
    use punchcard::libs::record::{ClockEntry, DayRecord};
    use punchcard::libs::store::RecordStore;
    use tempfile::TempDir;

    fn store_in(temp_dir: &TempDir) -> JsonRecordStore {
        JsonRecordStore::with_path(temp_dir.path().join("records.json"))
    }

    fn dt(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    fn sample_record(d: u32) -> DayRecord {
        let date = NaiveDate::from_ymd_opt(2025, 6, d).unwrap();
        let mut record = DayRecord::new(date, "default", dt(d, 17));
        record.entries.push(ClockEntry {
            id: 1,
            clock_in: dt(d, 9),
            clock_out: Some(dt(d, 17)),
            duration: Some(480),
        });
        record.recompute_total();
        record
    }

    #[test]
    fn test_put_and_fetch_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&temp_dir);

        let mut record = sample_record(1);
        store.put(&mut record).unwrap();
        assert_eq!(record.id, 1);

        let fetched = store
            .fetch("default", NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(fetched, record);
    }

    #[test]
    fn test_fetch_from_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&temp_dir);
        let fetched = store
            .fetch("default", NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
            .unwrap();
        assert!(fetched.is_none());
    }

    #[test]
    fn test_record_ids_increment_across_days() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&temp_dir);

        let mut first = sample_record(1);
        let mut second = sample_record(2);
        store.put(&mut first).unwrap();
        store.put(&mut second).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_put_replaces_record_for_same_day() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&temp_dir);

        let mut record = sample_record(1);
        store.put(&mut record).unwrap();
        record.entries.push(ClockEntry::open(2, dt(1, 18)));
        store.put(&mut record).unwrap();

        let fetched = store
            .fetch_range(
                "default",
                NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            )
            .unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].entries.len(), 2);
    }

    #[test]
    fn test_fetch_range_sorted_and_scoped() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&temp_dir);

        for d in [3, 1, 2] {
            store.put(&mut sample_record(d)).unwrap();
        }
        let mut other = sample_record(4);
        other.subject = "alice".to_string();
        store.put(&mut other).unwrap();

        let fetched = store
            .fetch_range(
                "default",
                NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            )
            .unwrap();
        assert_eq!(fetched.len(), 2);
        assert!(fetched[0].date < fetched[1].date);
    }
}
