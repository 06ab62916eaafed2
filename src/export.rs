//! CSV export of employee rows.
//!
//! Columns and header text match the dashboard grid. Fields containing a
//! comma, double quote, or line break are quoted per RFC 4180; everything
//! else is written bare, so typical exports stay byte-stable.

use crate::employee::Employee;
use crate::error::RosterError;
use std::borrow::Cow;
use std::path::Path;

/// Header row of every export, matching the dashboard column set.
pub const CSV_HEADER: &str = "Employee ID,Name,Department,Role,Salary,Status";

/// File name used when the caller does not choose one.
pub const DEFAULT_EXPORT_FILE: &str = "employees.csv";

fn csv_field(field: &str) -> Cow<'_, str> {
    if field.contains(|c: char| matches!(c, '"' | ',' | '\n' | '\r')) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn csv_row(row: &Employee) -> String {
    let fields = [
        row.id.to_string(),
        row.name.clone(),
        row.department.clone(),
        row.role.clone(),
        row.salary.to_string(),
        row.status_label().to_string(),
    ];
    fields
        .iter()
        .map(|field| csv_field(field))
        .collect::<Vec<_>>()
        .join(",")
}

/// Render rows as CSV text: header first, one line per row, joined with
/// `\n` and no trailing newline.
pub fn render_csv<'a>(rows: impl IntoIterator<Item = &'a Employee>) -> String {
    let mut lines = vec![CSV_HEADER.to_string()];
    lines.extend(rows.into_iter().map(csv_row));
    lines.join("\n")
}

/// Render rows and write them to the given path, creating parent
/// directories as needed.
pub fn write_csv<'a>(
    path: &Path,
    rows: impl IntoIterator<Item = &'a Employee>,
) -> Result<(), RosterError> {
    let text = render_csv(rows);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RosterError::Export(format!(
                    "Failed to create export directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    std::fs::write(path, text)
        .map_err(|e| RosterError::Export(format!("Failed to write {}: {}", path.display(), e)))?;
    Ok(())
}
