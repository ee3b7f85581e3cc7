//! SQLite-backed key-value storage for the goal collection.

mod schema;

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension};

use crate::store::KeyValueStore;

#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create data directory {}", parent.display())
            })?;
        }
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database {}", path.display()))?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        tracing::debug!(path = %path.display(), "Opened database");
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        schema::run_migrations(&conn)
    }

    // ============================================================
    // Key-value operations
    // ============================================================

    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let value: Option<String> = conn
            .query_row("SELECT value FROM kv_entries WHERE key = ?", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn set_value(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let now = Utc::now();
        conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            (key, value, now.to_rfc3339()),
        )?;
        Ok(())
    }

    /// When `key` was last written, if it exists.
    pub fn updated_at(&self, key: &str) -> Result<Option<DateTime<Utc>>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let raw: Option<String> = conn
            .query_row(
                "SELECT updated_at FROM kv_entries WHERE key = ?",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(raw.map(parse_datetime))
    }

    pub fn delete_value(&self, key: &str) -> Result<bool> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let rows = conn.execute("DELETE FROM kv_entries WHERE key = ?", [key])?;
        Ok(rows > 0)
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.get_value(key)
            .with_context(|| format!("Failed to read {key}"))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.set_value(key, value)
            .with_context(|| format!("Failed to write {key}"))
    }
}

/// Database location under the platform data directory.
pub fn default_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "habit-builder")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(dirs.data_dir().join("habits.db"))
}

fn parse_datetime(s: String) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
