//! Persistent storage using redb.
//!
//! Backs the shared store with a single ACID table. Markers survive restarts,
//! and the CLI can read or plant them in the same data directory while the
//! desktop app is closed (redb holds an exclusive lock while open).

use crate::error::DockError;
use crate::store::{KeyValueStore, StoreKey};
use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;

// Table definitions
const SHARED_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("shared_store");

/// Database file name inside the data directory
pub const DB_FILE_NAME: &str = "servicedock.redb";

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// This will:
    /// - Create the database directory if it doesn't exist
    /// - Initialize the database file
    /// - Create the shared-store table
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DockError> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SHARED_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Open `servicedock.redb` inside a data directory.
    pub fn open_in(data_dir: impl AsRef<Path>) -> Result<Self, DockError> {
        Self::new(data_dir.as_ref().join(DB_FILE_NAME))
    }

    /// List every key currently present, with its value size in bytes.
    pub fn entries(&self) -> Result<Vec<(String, usize)>, DockError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(SHARED_TABLE)?;

        let mut entries = Vec::new();
        for entry in table.iter()? {
            let (key, value) = entry?;
            entries.push((key.value().to_string(), value.value().len()));
        }
        Ok(entries)
    }

    /// Remove every well-known key.
    pub fn clear(&self) -> Result<(), DockError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(SHARED_TABLE)?;
            for key in StoreKey::ALL {
                table.remove(key.as_str())?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }
}

impl KeyValueStore for Storage {
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, DockError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(SHARED_TABLE)?;

        match table.get(key)? {
            Some(v) => Ok(Some(v.value().to_vec())),
            None => Ok(None),
        }
    }

    fn put_raw(&self, key: &str, value: &[u8]) -> Result<(), DockError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(SHARED_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove_raw(&self, key: &str) -> Result<(), DockError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(SHARED_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
