//! Employee command service: single entry point per CLI command variant.
//!
//! Owns the record workflows; the CLI parses arguments, calls one method
//! per variant, and formats the result.

use crate::employee::record::{Employee, EmployeeDraft};
use crate::employee::validation::validate_draft;
use crate::error::RosterError;
use crate::export;
use crate::query::{filter_rows, RowFilter};
use crate::store::EmployeeStore;
use crate::types::EmployeeId;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub struct EmployeeCommandService;

/// Result of the list command: the filtered view, in insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct ListResult {
    pub total: usize,
    pub employees: Vec<Employee>,
}

/// Result of the show command.
#[derive(Debug, Clone)]
pub struct ShowResult {
    pub employee: Employee,
}

/// Result of the add command.
#[derive(Debug, Clone)]
pub struct AddResult {
    pub employee: Employee,
}

/// Result of the edit command.
#[derive(Debug, Clone)]
pub struct EditResult {
    pub employee: Employee,
}

/// Result of the remove command.
#[derive(Debug, Clone)]
pub struct RemoveResult {
    pub removed: Employee,
}

/// Result of the export command.
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub rows_written: usize,
    pub path: PathBuf,
}

/// Store overview for the status command.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub store_path: String,
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departments: Option<Vec<DepartmentCount>>,
}

/// One row of the per-department breakdown, in first-appearance order.
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentCount {
    pub department: String,
    pub employees: usize,
}

impl EmployeeCommandService {
    /// List rows matching the filter.
    pub fn list(store: &EmployeeStore, filter: &RowFilter) -> Result<ListResult, RosterError> {
        let employees: Vec<Employee> = filter_rows(store.rows(), filter)
            .into_iter()
            .cloned()
            .collect();
        Ok(ListResult {
            total: employees.len(),
            employees,
        })
    }

    /// Show a single row by id.
    pub fn show(store: &EmployeeStore, id: EmployeeId) -> Result<ShowResult, RosterError> {
        let employee = store.get(id).cloned().ok_or(RosterError::NotFound(id))?;
        Ok(ShowResult { employee })
    }

    /// Validate and append a new row.
    pub fn add(store: &mut EmployeeStore, draft: EmployeeDraft) -> Result<AddResult, RosterError> {
        validate_draft(&draft)?;
        let employee = store.add(draft);
        Ok(AddResult { employee })
    }

    /// Validate and replace the row with the given id.
    pub fn edit(
        store: &mut EmployeeStore,
        id: EmployeeId,
        draft: EmployeeDraft,
    ) -> Result<EditResult, RosterError> {
        validate_draft(&draft)?;
        let employee = store.update(id, draft).ok_or(RosterError::NotFound(id))?;
        Ok(EditResult { employee })
    }

    /// Remove the row with the given id.
    pub fn remove(store: &mut EmployeeStore, id: EmployeeId) -> Result<RemoveResult, RosterError> {
        let removed = store.remove(id).ok_or(RosterError::NotFound(id))?;
        Ok(RemoveResult { removed })
    }

    /// Export the filtered view as CSV to the given path.
    pub fn export(
        store: &EmployeeStore,
        filter: &RowFilter,
        path: &Path,
    ) -> Result<ExportResult, RosterError> {
        let rows = filter_rows(store.rows(), filter);
        let rows_written = rows.len();
        export::write_csv(path, rows)?;
        Ok(ExportResult {
            rows_written,
            path: path.to_path_buf(),
        })
    }

    /// Store overview with an optional per-department breakdown.
    pub fn status(store: &EmployeeStore, breakdown: bool) -> Result<StatusReport, RosterError> {
        let active = store.rows().iter().filter(|row| row.status).count();
        let departments = breakdown.then(|| {
            let mut counts: Vec<DepartmentCount> = Vec::new();
            for row in store.rows() {
                match counts.iter_mut().find(|c| c.department == row.department) {
                    Some(count) => count.employees += 1,
                    None => counts.push(DepartmentCount {
                        department: row.department.clone(),
                        employees: 1,
                    }),
                }
            }
            counts
        });
        Ok(StatusReport {
            store_path: store.storage_location(),
            total: store.len(),
            active,
            inactive: store.len() - active,
            departments,
        })
    }
}
