//! Key-value persistence adapter.
//!
//! Wraps a single SQLite table of JSON-serialized values keyed by string. All
//! storage failures (I/O, quota, serialization, corrupt values) are contained
//! here: writes report a boolean outcome, reads fall back to a caller-supplied
//! default, and nothing past this boundary ever sees a storage error.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Handle to the durable key-value store.
pub struct KvStore {
    conn: Connection,
}

impl KvStore {
    /// Open (or create) the store at the given path, with schema initialized.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("failed to open store at {}", path.display()))?;

        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.execute_batch(SCHEMA_SQL)
            .context("failed to initialize schema")?;

        tracing::info!(path = %path.display(), "store opened");
        Ok(Self { conn })
    }

    /// Open an in-memory store for testing.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory store")?;
        conn.execute_batch(SCHEMA_SQL)
            .context("failed to initialize schema")?;
        Ok(Self { conn })
    }

    /// Serialize `value` to JSON and store it under `key`, replacing any
    /// previous value. Returns `false` on serialization or storage failure.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> bool {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(key, error = %e, "failed to serialize value");
                return false;
            }
        };

        let result = self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, json],
        );

        match result {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(key, error = %e, "storage write failed");
                false
            }
        }
    }

    /// Read and deserialize the value stored at `key`, or return `default` if
    /// the key is absent or its value does not parse. A corrupt value is
    /// treated exactly like an absent one.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let stored: Option<String> = match self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
        {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!(key, error = %e, "storage read failed, using default");
                return default;
            }
        };

        match stored {
            Some(json) => match serde_json::from_str(&json) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(key, error = %e, "stored value is corrupt, using default");
                    default
                }
            },
            None => default,
        }
    }

    /// Delete `key`. Removing an absent key is a success.
    pub fn remove(&self, key: &str) -> bool {
        match self
            .conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])
        {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(key, error = %e, "storage remove failed");
                false
            }
        }
    }

    /// Check whether `key` holds a value.
    pub fn exists(&self, key: &str) -> bool {
        self.conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM kv WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .unwrap_or(false)
    }

    /// Remove every key the application recognizes. Used for a full local
    /// reset. Returns `false` if any removal failed.
    pub fn clear_all(&self, keys: &[&str]) -> bool {
        let mut ok = true;
        for key in keys {
            ok &= self.remove(key);
        }
        ok
    }
}
