use crate::db::migrations::MigrationManager;
use crate::libs::config::Config;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "shiftlog.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the configured database, creating and migrating it as needed.
    pub fn new() -> Result<Db> {
        let db_file_path = Config::load()?.database_path()?;
        Self::open(db_file_path)
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    pub fn in_memory() -> Result<Db> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> Result<Db> {
        MigrationManager::new().run_migrations(&mut conn)?;
        Ok(Db { conn })
    }
}
