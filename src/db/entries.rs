use crate::db::db::Db;
use crate::libs::entry::{EntryFields, EntryFilter, Period, TimeEntry};
use anyhow::Result;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

const COLUMNS: &str = "id, date, start_time, end_time, total_hours, day, month, year, site_location, created_at, updated_at";
const INSERT: &str = "INSERT INTO time_entries
    (date, start_time, end_time, total_hours, day, month, year, site_location, created_at, updated_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)";
const UPDATE: &str = "UPDATE time_entries SET
    date = ?1, start_time = ?2, end_time = ?3, total_hours = ?4, day = ?5, month = ?6, year = ?7, site_location = ?8, updated_at = ?9
    WHERE id = ?10";
const DELETE: &str = "DELETE FROM time_entries WHERE id = ?1";

pub struct Entries {
    conn: Connection,
}

impl Entries {
    pub fn new() -> Result<Self> {
        Ok(Self::with_db(Db::new()?))
    }

    pub fn with_db(db: Db) -> Self {
        Entries { conn: db.conn }
    }

    pub fn insert(&mut self, fields: &EntryFields) -> Result<TimeEntry> {
        let now = Utc::now();
        self.conn.execute(
            INSERT,
            params![
                fields.date,
                fields.start_time,
                fields.end_time,
                fields.total_hours,
                fields.day,
                fields.month,
                fields.year,
                fields.site_location,
                now,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        self.fetch(id)?
            .ok_or_else(|| anyhow::anyhow!("inserted entry #{} could not be read back", id))
    }

    /// Replaces every derived field of an entry. Returns `None` when no entry
    /// has the id.
    pub fn update(&mut self, id: i64, fields: &EntryFields) -> Result<Option<TimeEntry>> {
        let changed = self.conn.execute(
            UPDATE,
            params![
                fields.date,
                fields.start_time,
                fields.end_time,
                fields.total_hours,
                fields.day,
                fields.month,
                fields.year,
                fields.site_location,
                Utc::now(),
                id,
            ],
        )?;

        if changed == 0 {
            return Ok(None);
        }
        self.fetch(id)
    }

    /// Deletes an entry, reporting whether a row was removed.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        Ok(self.conn.execute(DELETE, [id])? > 0)
    }

    pub fn fetch(&mut self, id: i64) -> Result<Option<TimeEntry>> {
        let sql = format!("SELECT {} FROM time_entries WHERE id = ?1", COLUMNS);
        let entry = self.conn.query_row(&sql, [id], Self::map_row).optional()?;
        Ok(entry)
    }

    /// All entries, newest date first.
    pub fn fetch_all(&mut self) -> Result<Vec<TimeEntry>> {
        let sql = format!("SELECT {} FROM time_entries ORDER BY date DESC, id DESC", COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let entries = stmt.query_map([], Self::map_row)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }

    /// Entries matching the filter in chronological order. Ties on the same
    /// date keep insertion order.
    pub fn query(&mut self, filter: &EntryFilter) -> Result<Vec<TimeEntry>> {
        let sql = format!(
            "SELECT {} FROM time_entries
             WHERE (?1 IS NULL OR year = ?1) AND (?2 IS NULL OR month = ?2)
             ORDER BY date ASC, id ASC",
            COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let entries = stmt
            .query_map(params![filter.year, filter.month], Self::map_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }

    pub fn fetch_period(&mut self, period: &Period) -> Result<Vec<TimeEntry>> {
        self.query(&period.filter())
    }

    pub fn is_healthy(&self) -> bool {
        self.conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0)).is_ok()
    }

    fn map_row(row: &Row) -> rusqlite::Result<TimeEntry> {
        Ok(TimeEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            start_time: row.get(2)?,
            end_time: row.get(3)?,
            total_hours: row.get(4)?,
            day: row.get(5)?,
            month: row.get(6)?,
            year: row.get(7)?,
            site_location: row.get(8)?,
            created_at: row.get(9)?,
            updated_at: row.get(10)?,
        })
    }
}
