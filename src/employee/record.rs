//! The employee record and its draft form.

use crate::types::{Department, EmployeeId};
use serde::{Deserialize, Serialize};

/// Departments offered by the interactive forms. Free-text departments
/// remain valid; this list only drives selection prompts.
pub const BUILTIN_DEPARTMENTS: [&str; 3] = ["HR", "Engineering", "Marketing"];

/// A single employee row as stored and displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub department: Department,
    pub role: String,
    pub salary: f64,
    /// Active (true) or inactive (false)
    pub status: bool,
}

impl Employee {
    /// Human-readable label for the status flag.
    pub fn status_label(&self) -> &'static str {
        if self.status {
            "Active"
        } else {
            "Inactive"
        }
    }

    /// Draft carrying this record's fields, used to pre-fill edit forms.
    pub fn draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name.clone(),
            department: self.department.clone(),
            role: self.role.clone(),
            salary: self.salary,
            status: self.status,
        }
    }
}

/// Field values for a record before an id has been assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub name: String,
    pub department: Department,
    pub role: String,
    pub salary: f64,
    /// Defaults to inactive when omitted
    #[serde(default)]
    pub status: bool,
}

impl EmployeeDraft {
    /// Materialize the draft into a record with the given id.
    pub fn into_employee(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            name: self.name,
            department: self.department,
            role: self.role,
            salary: self.salary,
            status: self.status,
        }
    }
}
