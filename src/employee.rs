//! Employee Records
//!
//! The domain model for roster: the employee record itself, boundary
//! validation for drafts, and the command service the CLI calls into.

pub mod commands;
pub mod record;
pub mod validation;

pub use record::{Employee, EmployeeDraft, BUILTIN_DEPARTMENTS};
