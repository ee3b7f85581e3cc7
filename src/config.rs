//! Runtime configuration loaded from the environment.

use std::path::PathBuf;

use anyhow::Result;

/// Environment variable overriding the database location.
pub const DB_PATH_ENV: &str = "HABIT_BUILDER_DB";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// SQLite file holding the saved goals.
    pub db_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// platform data directory.
    pub fn from_env() -> Result<Self> {
        let db_path = match std::env::var_os(DB_PATH_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => crate::db::default_path()?,
        };
        Ok(Self { db_path })
    }

    /// Create a config pointing at a specific database file.
    pub fn with_db_path(path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: path.into(),
        }
    }
}
