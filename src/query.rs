//! Row filtering for the dashboard views.
//!
//! Filtering is a pure function over a snapshot of rows: predicates are
//! AND-composed and the original row order is preserved. An empty filter
//! matches every row.

use crate::employee::Employee;
use serde::{Deserialize, Serialize};

/// Tri-state status predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Match active and inactive rows alike
    #[default]
    Any,
    Active,
    Inactive,
}

impl StatusFilter {
    /// Whether a row with the given status flag passes this filter.
    pub fn accepts(&self, status: bool) -> bool {
        match self {
            StatusFilter::Any => true,
            StatusFilter::Active => status,
            StatusFilter::Inactive => !status,
        }
    }
}

/// AND-composed row predicates. The `Default` value is the unfiltered view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowFilter {
    /// Case-insensitive substring match against the name field
    pub name_text: Option<String>,
    /// Exact department match, case-sensitive
    pub department: Option<String>,
    #[serde(default)]
    pub status: StatusFilter,
}

impl RowFilter {
    /// Whether the row passes every configured predicate. Blank predicate
    /// values count as unset.
    pub fn matches(&self, row: &Employee) -> bool {
        if let Some(text) = self.name_text.as_deref().filter(|t| !t.is_empty()) {
            if !row.name.to_lowercase().contains(&text.to_lowercase()) {
                return false;
            }
        }
        if let Some(department) = self.department.as_deref().filter(|d| !d.is_empty()) {
            if row.department != department {
                return false;
            }
        }
        self.status.accepts(row.status)
    }

    /// True when no predicate is set and every row would match.
    pub fn is_unfiltered(&self) -> bool {
        self.name_text.as_deref().map_or(true, str::is_empty)
            && self.department.as_deref().map_or(true, str::is_empty)
            && self.status == StatusFilter::Any
    }
}

/// Rows passing the filter, in their original relative order.
///
/// The input slice is never reordered or mutated; callers keep ownership
/// of the full collection and receive a borrowed view.
pub fn filter_rows<'a>(rows: &'a [Employee], filter: &RowFilter) -> Vec<&'a Employee> {
    rows.iter().filter(|row| filter.matches(row)).collect()
}
