//! SQLite-backed key-value store implementing the core persistence port.

use std::path::Path;

use hanci_core::error::StoreError;
use hanci_core::state::KeyValueStore;
use rusqlite::{params, Connection, OptionalExtension};

/// Single flat table; values are JSON strings written by the core.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the store at `path`, creating the schema if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(backend)?;
        Self::initialize(conn)
    }

    /// In-memory store (for testing).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(backend)?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA).map_err(backend)?;
        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(backend)
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn
            .execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map(|_| ())
            .map_err(backend)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])
            .map(|_| ())
            .map_err(backend)
    }
}

fn backend(err: rusqlite::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn round_trips_values() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get_raw("missing").unwrap(), None);

        store.set_raw("theme", "\"dark\"").unwrap();
        assert_eq!(store.get_raw("theme").unwrap().as_deref(), Some("\"dark\""));

        store.set_raw("theme", "\"light\"").unwrap();
        assert_eq!(
            store.get_raw("theme").unwrap().as_deref(),
            Some("\"light\"")
        );

        store.remove("theme").unwrap();
        assert_eq!(store.get_raw("theme").unwrap(), None);
    }

    #[test]
    fn persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("study.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.set_raw("studied_words", "[]").unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(
            store.get_raw("studied_words").unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn core_state_round_trips_through_sqlite() {
        use hanci_core::state::StudyState;
        use hanci_core::types::RecordId;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("study.db");
        let id = RecordId::from_sequence_index(1);

        {
            let mut state = StudyState::load(Box::new(SqliteStore::open(&path).unwrap()));
            state.mark_studied(id).unwrap();
        }

        let state = StudyState::load(Box::new(SqliteStore::open(&path).unwrap()));
        assert!(state.is_studied(id));
    }
}
