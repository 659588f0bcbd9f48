// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Local persistence.
//!
//! This module stores the catalog snapshot in a small SQLite key-value
//! table. The whole catalog is serialized as one JSON value under a single
//! key, and every save overwrites the previous snapshot. There is no
//! merging or versioning: the last write wins.
//!
//! # Tables
//!
//! * `kv` - Arbitrary string values addressed by a unique key.

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};

use crate::model::MovieRecord;

/// Key holding the serialized catalog.
pub(crate) const CATALOG_KEY: &str = "movies";

pub(crate) struct Storage {
    conn: Connection,
}

impl Storage {
    /// Opens (or creates) the storage database file.
    ///
    /// This function performs the following setup:
    /// * **WAL Mode**: Enables Write-Ahead Logging.
    /// * **Performance Tuning**: Sets synchronous mode to `NORMAL`.
    /// * **Schema**: Executes [`create_schema`] to ensure the table exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * The database file cannot be opened.
    /// * The initial PRAGMA configurations fail.
    /// * The schema initialization fails.
    pub(crate) fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open storage database {path}"))?;

        let journal_mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |r| r.get(0))?;
        if journal_mode != "wal" {
            anyhow::bail!(
                "Failed to switch to WAL mode. Current mode: {}",
                journal_mode
            );
        }

        conn.execute_batch("PRAGMA synchronous = NORMAL;")?;

        create_schema(&conn)?;

        Ok(Self { conn })
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        create_schema(&conn)?;
        Ok(Self { conn })
    }

    pub(crate) fn get(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self.conn.prepare_cached("SELECT value FROM kv WHERE key = ?")?;
        let value = stmt.query_row([key], |row| row.get(0)).optional()?;

        Ok(value)
    }

    pub(crate) fn set(&self, key: &str, value: &str) -> Result<()> {
        let sql = "
            INSERT INTO kv (key, value)
            VALUES (?1, ?2)
            ON CONFLICT (key)
            DO UPDATE SET value = ?2";

        let mut stmt = self.conn.prepare_cached(sql)?;
        stmt.execute(params![key, value])?;

        Ok(())
    }

    /// Reads the saved catalog snapshot, if one has been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored value is not a valid
    /// list of movies.
    pub(crate) fn load_catalog(&self) -> Result<Option<Vec<MovieRecord>>> {
        let Some(json) = self.get(CATALOG_KEY)? else {
            return Ok(None);
        };

        let records = serde_json::from_str(&json).context("Stored catalog is corrupt")?;

        Ok(Some(records))
    }

    /// Overwrites the saved snapshot with the given records.
    pub(crate) fn save_catalog(&self, records: &[MovieRecord]) -> Result<()> {
        let json = serde_json::to_string(records).context("Failed to serialize catalog")?;
        self.set(CATALOG_KEY, &json)
    }
}

/// Create the database schema.
///
/// # Errors
///
/// Returns an error if the statement fails, for example due to permission
/// issues with the database file.
fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );",
    )
    .context("Failed to create schema")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<MovieRecord> {
        vec![
            MovieRecord::new("Alpha", "first", 2020, "a.jpg"),
            MovieRecord::new("Beta", "second", 2021, "b.jpg"),
        ]
    }

    #[test]
    fn empty_storage_has_no_snapshot() {
        let storage = Storage::open_in_memory().unwrap();
        assert!(storage.load_catalog().unwrap().is_none());
    }

    #[test]
    fn save_then_load() {
        let storage = Storage::open_in_memory().unwrap();
        storage.save_catalog(&records()).unwrap();
        assert_eq!(storage.load_catalog().unwrap(), Some(records()));
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let storage = Storage::open_in_memory().unwrap();
        storage.save_catalog(&records()).unwrap();

        let replacement = vec![MovieRecord::new("Gamma", "", 1999, "")];
        storage.save_catalog(&replacement).unwrap();

        assert_eq!(storage.load_catalog().unwrap(), Some(replacement));
    }

    #[test]
    fn corrupt_snapshot_is_an_error() {
        let storage = Storage::open_in_memory().unwrap();
        storage.set(CATALOG_KEY, "not json").unwrap();
        assert!(storage.load_catalog().is_err());
    }

    #[test]
    fn file_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cinedex.db");
        let path = path.to_str().unwrap();

        Storage::open(path).unwrap().save_catalog(&records()).unwrap();

        let reopened = Storage::open(path).unwrap();
        assert_eq!(reopened.load_catalog().unwrap(), Some(records()));
    }
}
