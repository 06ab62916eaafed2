//! Format employee rows and command results as text.

use crate::employee::commands::{ExportResult, ListResult, StatusReport};
use crate::employee::Employee;
use crate::error::RosterError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Render rows as a table with the dashboard column set.
pub fn format_roster_table<'a>(rows: impl IntoIterator<Item = &'a Employee>) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec![
        "Employee ID",
        "Name",
        "Department",
        "Role",
        "Salary",
        "Status",
    ]);
    for row in rows {
        table.add_row(vec![
            row.id.to_string(),
            row.name.clone(),
            row.department.clone(),
            row.role.clone(),
            row.salary.to_string(),
            row.status_label().to_string(),
        ]);
    }
    format!("{}", table)
}

/// Format a list result as human-readable text.
pub fn format_list_text(result: &ListResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Employees")));
    if result.employees.is_empty() {
        out.push_str("No employees found.\n");
        return out;
    }
    out.push_str(&format!("{}\n\n", format_roster_table(&result.employees)));
    out.push_str(&format!("Total: {} employees.\n", result.total));
    out
}

/// Format a single employee as a one-row table.
pub fn format_employee_text(employee: &Employee) -> String {
    format_roster_table(std::iter::once(employee))
}

/// Format an export result as human-readable text.
pub fn format_export_text(result: &ExportResult) -> String {
    format!(
        "Exported {} rows to {}",
        result.rows_written,
        result.path.display()
    )
}

/// Format a status report as human-readable text.
pub fn format_status_text(report: &StatusReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Roster Status")));
    out.push_str(&format!("  Store path: {}\n", report.store_path));
    out.push_str(&format!("  Total employees: {}\n", report.total));
    out.push_str(&format!("  Active: {}\n", report.active));
    out.push_str(&format!("  Inactive: {}\n", report.inactive));
    if let Some(ref departments) = report.departments {
        out.push_str(&format!(
            "\n{}\n\n",
            format_section_heading("Departments")
        ));
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Department", "Employees"]);
        for row in departments {
            table.add_row(vec![row.department.clone(), row.employees.to_string()]);
        }
        out.push_str(&format!("{}\n", table));
    }
    out
}

/// Serialize a command result as pretty-printed JSON.
pub fn to_json_pretty<T: serde::Serialize>(value: &T) -> Result<String, RosterError> {
    Ok(serde_json::to_string_pretty(value)?)
}
