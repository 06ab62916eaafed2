//! Boundary validation for employee drafts.
//!
//! Each rule produces an operator-facing message. Callers collect every
//! failure for a draft rather than stopping at the first.

use crate::employee::record::EmployeeDraft;
use crate::error::RosterError;

/// All validation failures for the draft, in field order.
pub fn draft_errors(draft: &EmployeeDraft) -> Vec<String> {
    let mut errors = Vec::new();
    if draft.name.trim().is_empty() {
        errors.push("Please enter employee name".to_string());
    }
    if draft.department.trim().is_empty() {
        errors.push("Please select a department".to_string());
    }
    if draft.role.trim().is_empty() {
        errors.push("Please enter employee role".to_string());
    }
    if !draft.salary.is_finite() {
        errors.push("Please enter salary".to_string());
    }
    errors
}

/// Accept the draft or report every failed rule in a single error.
pub fn validate_draft(draft: &EmployeeDraft) -> Result<(), RosterError> {
    let errors = draft_errors(draft);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(RosterError::Validation(errors.join("; ")))
    }
}
