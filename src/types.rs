//! Core types for the roster employee records system.

/// EmployeeId: Numeric identifier, unique within a single store
pub type EmployeeId = u64;

/// Department: Department name as entered or selected by the operator
pub type Department = String;
