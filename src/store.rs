//! Employee Record Store
//!
//! Owns the authoritative in-memory employee collection and keeps a
//! durable copy synchronized through the collection storage boundary.
//! Reads never touch storage; every mutation writes the whole collection
//! back through it.

pub mod persistence;

use crate::employee::{Employee, EmployeeDraft};
use crate::types::EmployeeId;
use std::sync::Arc;
use tracing::{debug, warn};

pub use persistence::{
    CollectionStorage, MemoryCollectionStorage, SledCollectionStorage, COLLECTION_KEY,
};

/// Fixed example records written on first run so a fresh dashboard has
/// something to show.
pub fn seed_collection() -> Vec<Employee> {
    vec![
        Employee {
            id: 1,
            name: "Alice".to_string(),
            department: "HR".to_string(),
            role: "Manager".to_string(),
            salary: 60000.0,
            status: true,
        },
        Employee {
            id: 2,
            name: "Bob".to_string(),
            department: "Engineering".to_string(),
            role: "Developer".to_string(),
            salary: 75000.0,
            status: true,
        },
        Employee {
            id: 3,
            name: "Charlie".to_string(),
            department: "Marketing".to_string(),
            role: "Analyst".to_string(),
            salary: 55000.0,
            status: false,
        },
    ]
}

/// The authoritative employee collection with write-through persistence.
///
/// Memory is the source of truth once loaded. A failed write is logged
/// and the in-memory state stands; the next successful write persists
/// the full current collection.
pub struct EmployeeStore {
    rows: Vec<Employee>,
    storage: Arc<dyn CollectionStorage>,
}

impl EmployeeStore {
    /// Load the collection, seeding the example records when nothing has
    /// been stored yet or the stored document cannot be read.
    pub fn open(storage: Arc<dyn CollectionStorage>) -> Self {
        Self::load(storage, true)
    }

    /// Load the collection, starting empty on first run.
    pub fn open_unseeded(storage: Arc<dyn CollectionStorage>) -> Self {
        Self::load(storage, false)
    }

    fn load(storage: Arc<dyn CollectionStorage>, seed: bool) -> Self {
        let rows = match storage.get() {
            Ok(Some(rows)) => {
                debug!(count = rows.len(), "Loaded employee collection");
                return Self { rows, storage };
            }
            Ok(None) => {
                debug!("No stored collection found, starting fresh");
                if seed {
                    seed_collection()
                } else {
                    Vec::new()
                }
            }
            Err(e) => {
                warn!(
                    "Failed to read stored collection, falling back to defaults: {}",
                    e
                );
                if seed {
                    seed_collection()
                } else {
                    Vec::new()
                }
            }
        };
        let store = Self { rows, storage };
        store.persist();
        store
    }

    /// Every row, in insertion order.
    pub fn rows(&self) -> &[Employee] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a row by id.
    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.rows.iter().find(|row| row.id == id)
    }

    // Highest current id plus one. Ids of removed rows may be reused, but
    // a fresh id can never collide with a live row.
    fn next_id(&self) -> EmployeeId {
        self.rows.iter().map(|row| row.id).max().unwrap_or(0) + 1
    }

    /// Append a new row built from the draft, assigning a fresh id.
    pub fn add(&mut self, draft: EmployeeDraft) -> Employee {
        let employee = draft.into_employee(self.next_id());
        self.rows.push(employee.clone());
        self.persist();
        employee
    }

    /// Replace the row with the given id. Returns the updated record, or
    /// `None` when no row has that id.
    pub fn update(&mut self, id: EmployeeId, draft: EmployeeDraft) -> Option<Employee> {
        let slot = self.rows.iter_mut().find(|row| row.id == id)?;
        *slot = draft.into_employee(id);
        let updated = slot.clone();
        self.persist();
        Some(updated)
    }

    /// Remove the row with the given id, returning it.
    pub fn remove(&mut self, id: EmployeeId) -> Option<Employee> {
        let index = self.rows.iter().position(|row| row.id == id)?;
        let removed = self.rows.remove(index);
        self.persist();
        Some(removed)
    }

    /// Where the durable collection lives.
    pub fn storage_location(&self) -> String {
        self.storage.location()
    }

    // Write the whole collection through to storage. A failure is logged
    // and memory remains authoritative; the next successful write carries
    // the full current state.
    fn persist(&self) {
        if let Err(e) = self.storage.set(&self.rows) {
            warn!("Failed to persist employee collection: {}", e);
        }
    }
}
