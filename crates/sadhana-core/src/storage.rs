//! Key-value store capabilities used by the welcome gate.
//!
//! Two flavours back the gate:
//! - [`DurableStore`]: redb file in the data directory, survives restarts
//!   (holds the shown flag)
//! - [`MemoryStore`]: process-lifetime map (holds the session marker)

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};

use crate::error::WelcomeResult;

const FLAGS_TABLE: TableDefinition<&str, &str> = TableDefinition::new("flags");

/// String key-value capability.
///
/// Implementations must be cheap to call from the UI thread.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> WelcomeResult<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> WelcomeResult<()>;
}

/// In-memory store living as long as the process.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> WelcomeResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> WelcomeResult<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Durable store using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct DurableStore {
    db: Arc<RwLock<Database>>,
}

impl DurableStore {
    /// Open (or create) the flag database at the given path.
    ///
    /// Creates the parent directory and the `flags` table if missing.
    pub fn open(path: impl AsRef<Path>) -> WelcomeResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(FLAGS_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!(path = %path.display(), "Opened durable flag store");

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }
}

impl KeyValueStore for DurableStore {
    fn get(&self, key: &str) -> WelcomeResult<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(FLAGS_TABLE)?;

        Ok(table.get(key)?.map(|v| v.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> WelcomeResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(FLAGS_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store_get_set() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("shared", "yes").unwrap();
        assert_eq!(other.get("shared").unwrap().as_deref(), Some("yes"));
    }

    #[test]
    fn test_durable_store_missing_key() {
        let dir = tempdir().unwrap();
        let store = DurableStore::open(dir.path().join("welcome.redb")).unwrap();
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn test_durable_store_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("welcome.redb");

        {
            let store = DurableStore::open(&path).unwrap();
            store.set("welcomePopupShownInBrowser", "true").unwrap();
        }

        let reopened = DurableStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("welcomePopupShownInBrowser").unwrap().as_deref(),
            Some("true")
        );
    }
}
