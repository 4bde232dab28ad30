//! SQLite-backed persistence gateway (table `kv`).

use crate::gateway::KvStore;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub struct SqliteKvStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteKvStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Stored keys with their last update time, ordered by key.
    pub fn entries(&self) -> rusqlite::Result<Vec<(String, String)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key, updated_at FROM kv ORDER BY key ASC")?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

impl KvStore for SqliteKvStore<'_> {
    fn get(&self, key: &str) -> Option<String> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| row.get(0))
            .optional()
            .ok()
            .flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let now = Local::now().to_rfc3339();

        // write errors are swallowed: the next read simply sees the old value
        let _ = self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        );
    }
}
