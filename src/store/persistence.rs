//! Collection storage: the persistence boundary of the record store.
//!
//! The whole collection lives under a single key as one JSON document.
//! `get` returns the deserialized collection, or `None` when the key has
//! never been written; `set` replaces the document wholesale.

use crate::employee::Employee;
use crate::error::StorageError;
use parking_lot::Mutex;
use std::path::Path;

/// Key holding the serialized employee collection.
pub const COLLECTION_KEY: &str = "employees";

/// Key-value persistence for the employee collection.
pub trait CollectionStorage: Send + Sync {
    /// Read the stored collection. `None` means nothing was ever written.
    fn get(&self) -> Result<Option<Vec<Employee>>, StorageError>;

    /// Replace the stored collection with the given rows.
    fn set(&self, rows: &[Employee]) -> Result<(), StorageError>;

    /// Where the collection is held, for status output.
    fn location(&self) -> String;
}

/// Collection storage backed by a sled database on disk.
pub struct SledCollectionStorage {
    db: sled::Db,
    location: String,
}

impl SledCollectionStorage {
    /// Open (or create) the database at the given directory.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let db = sled::open(path).map_err(|e| {
            StorageError::Backend(format!(
                "Failed to open database at {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self {
            db,
            location: path.display().to_string(),
        })
    }

    /// Wrap an already-open database handle.
    pub fn from_db(db: sled::Db) -> Self {
        Self {
            db,
            location: "<ephemeral>".to_string(),
        }
    }
}

impl CollectionStorage for SledCollectionStorage {
    fn get(&self) -> Result<Option<Vec<Employee>>, StorageError> {
        let value = self
            .db
            .get(COLLECTION_KEY)
            .map_err(|e| StorageError::Backend(format!("Failed to read collection: {}", e)))?;
        match value {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn set(&self, rows: &[Employee]) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(rows)?;
        self.db
            .insert(COLLECTION_KEY, bytes)
            .map_err(|e| StorageError::Backend(format!("Failed to write collection: {}", e)))?;
        self.db
            .flush()
            .map_err(|e| StorageError::Backend(format!("Failed to flush collection: {}", e)))?;
        Ok(())
    }

    fn location(&self) -> String {
        self.location.clone()
    }
}

/// In-memory collection storage for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryCollectionStorage {
    cell: Mutex<Option<Vec<u8>>>,
}

impl MemoryCollectionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CollectionStorage for MemoryCollectionStorage {
    fn get(&self) -> Result<Option<Vec<Employee>>, StorageError> {
        match self.cell.lock().as_ref() {
            Some(bytes) => Ok(Some(serde_json::from_slice(bytes)?)),
            None => Ok(None),
        }
    }

    fn set(&self, rows: &[Employee]) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(rows)?;
        *self.cell.lock() = Some(bytes);
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
