//! Persistence port for the goal collection.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;

/// Key under which the serialized collection is stored.
pub const GOALS_KEY: &str = "habitBuilderGoals";

/// Where the store loads its initial state from and writes it back to.
///
/// `load` is called once when the store is opened; `save` after every
/// committed mutation with the full serialized collection. `Ok(None)` from
/// `load` means nothing was saved yet and is not an error.
pub trait GoalRepository {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, serialized: &str) -> Result<()>;
}

/// A minimal string key-value store, the shape of browser-style local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore> GoalRepository for S {
    fn load(&self) -> Result<Option<String>> {
        self.get(GOALS_KEY)
    }

    fn save(&self, serialized: &str) -> Result<()> {
        self.set(GOALS_KEY, serialized)
    }
}

/// In-memory key-value store. Clones share the same map, so a test can keep
/// one handle and inspect what the store saved through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    writes: Arc<Mutex<usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `serialized` already stored under [`GOALS_KEY`].
    pub fn with_goals(serialized: impl Into<String>) -> Self {
        let store = Self::new();
        store
            .entries
            .lock()
            .expect("memory store lock poisoned")
            .insert(GOALS_KEY.to_string(), serialized.into());
        store
    }

    /// Number of `set` calls seen so far.
    pub fn write_count(&self) -> usize {
        *self.writes.lock().expect("memory store lock poisoned")
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().expect("memory store lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .expect("memory store lock poisoned")
            .insert(key.to_string(), value.to_string());
        *self.writes.lock().expect("memory store lock poisoned") += 1;
        Ok(())
    }
}
