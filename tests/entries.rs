#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use shiftlog::db::db::Db;
    use shiftlog::db::entries::Entries;
    use shiftlog::libs::entry::{normalize, EntryFilter, NewEntry, Period};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct EntriesTestContext {
        _temp_dir: TempDir,
        entries: Entries,
    }

    impl TestContext for EntriesTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("shiftlog.db")).unwrap();
            EntriesTestContext {
                entries: Entries::with_db(db),
                _temp_dir: temp_dir,
            }
        }
    }

    impl EntriesTestContext {
        fn add(&mut self, date: &str, start: &str, end: &str, site: Option<&str>) -> i64 {
            let fields = normalize(&NewEntry::new(date, start, end, site)).unwrap();
            self.entries.insert(&fields).unwrap().id
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_context(EntriesTestContext)]
    #[test]
    fn test_insert_and_fetch(ctx: &mut EntriesTestContext) {
        let id = ctx.add("2024-01-05", "09:15", "17:45", Some("Warehouse"));

        let entry = ctx.entries.fetch(id).unwrap().unwrap();
        assert_eq!(entry.date, date(2024, 1, 5));
        assert_eq!(entry.start_time, "09:15");
        assert_eq!(entry.end_time, "17:45");
        assert_eq!(entry.total_hours, 8.5);
        assert_eq!(entry.day, "Friday");
        assert_eq!(entry.month, "January");
        assert_eq!(entry.year, 2024);
        assert_eq!(entry.site_location, "Warehouse");
    }

    #[test_context(EntriesTestContext)]
    #[test]
    fn test_period_query_is_exact_and_ascending(ctx: &mut EntriesTestContext) {
        ctx.add("2024-01-12", "09:00", "16:30", None);
        ctx.add("2024-02-01", "09:00", "17:00", None);
        ctx.add("2024-01-05", "09:00", "17:00", None);
        ctx.add("2023-01-20", "09:00", "17:00", None);

        let entries = ctx.entries.fetch_period(&Period::new(2024, 1).unwrap()).unwrap();

        let dates: Vec<NaiveDate> = entries.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![date(2024, 1, 5), date(2024, 1, 12)]);
        assert!(entries.iter().all(|e| e.year == 2024 && e.month == "January"));
    }

    #[test_context(EntriesTestContext)]
    #[test]
    fn test_same_day_entries_keep_insertion_order(ctx: &mut EntriesTestContext) {
        let morning = ctx.add("2024-03-04", "06:00", "10:00", None);
        let evening = ctx.add("2024-03-04", "18:00", "22:00", None);

        let entries = ctx.entries.fetch_period(&Period::new(2024, 3).unwrap()).unwrap();

        let ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![morning, evening]);
    }

    #[test_context(EntriesTestContext)]
    #[test]
    fn test_partial_filters(ctx: &mut EntriesTestContext) {
        ctx.add("2023-03-10", "09:00", "17:00", None);
        ctx.add("2024-03-11", "09:00", "17:00", None);
        ctx.add("2024-04-11", "09:00", "17:00", None);

        let by_year = ctx
            .entries
            .query(&EntryFilter {
                year: Some(2024),
                month: None,
            })
            .unwrap();
        let by_month = ctx
            .entries
            .query(&EntryFilter {
                year: None,
                month: Some("March".to_string()),
            })
            .unwrap();
        let everything = ctx.entries.query(&EntryFilter::default()).unwrap();

        assert_eq!(by_year.len(), 2);
        assert_eq!(by_month.len(), 2);
        assert_eq!(everything.len(), 3);
        assert_eq!(everything[0].date, date(2023, 3, 10));
    }

    #[test_context(EntriesTestContext)]
    #[test]
    fn test_fetch_all_is_newest_first(ctx: &mut EntriesTestContext) {
        ctx.add("2024-01-05", "09:00", "17:00", None);
        ctx.add("2024-06-01", "09:00", "17:00", None);
        ctx.add("2023-12-31", "09:00", "17:00", None);

        let dates: Vec<NaiveDate> = ctx.entries.fetch_all().unwrap().iter().map(|e| e.date).collect();

        assert_eq!(dates, vec![date(2024, 6, 1), date(2024, 1, 5), date(2023, 12, 31)]);
    }

    #[test_context(EntriesTestContext)]
    #[test]
    fn test_update_recomputes_derived_fields(ctx: &mut EntriesTestContext) {
        let id = ctx.add("2024-01-05", "09:00", "17:00", Some("Warehouse"));
        let before = ctx.entries.fetch(id).unwrap().unwrap();

        let fields = normalize(&NewEntry::new("2024-02-29", "22:00", "06:30", None)).unwrap();
        let after = ctx.entries.update(id, &fields).unwrap().unwrap();

        assert_eq!(after.id, id);
        assert_eq!(after.total_hours, 8.5);
        assert_eq!(after.day, "Thursday");
        assert_eq!(after.month, "February");
        assert_eq!(after.site_location, "Office");
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at >= before.updated_at);

        let january = ctx.entries.fetch_period(&Period::new(2024, 1).unwrap()).unwrap();
        assert!(january.is_empty());
    }

    #[test_context(EntriesTestContext)]
    #[test]
    fn test_delete_is_permanent(ctx: &mut EntriesTestContext) {
        let id = ctx.add("2024-01-05", "09:00", "17:00", None);

        assert!(ctx.entries.delete(id).unwrap());
        assert!(ctx.entries.fetch(id).unwrap().is_none());
        assert!(ctx.entries.fetch_all().unwrap().is_empty());
        assert!(!ctx.entries.delete(id).unwrap());
    }

    #[test]
    fn test_entries_survive_reopen() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("data").join("shiftlog.db");

        {
            let mut entries = Entries::with_db(Db::open(&path).unwrap());
            let fields = normalize(&NewEntry::new("2024-01-05", "09:00", "17:00", None)).unwrap();
            entries.insert(&fields).unwrap();
        }

        let mut entries = Entries::with_db(Db::open(&path).unwrap());
        assert_eq!(entries.fetch_all().unwrap().len(), 1);
    }
}
