//! CLI Tooling
//!
//! Command-line interface for all roster operations. Parses arguments,
//! drives the employee command service, and formats results.

use crate::config::{xdg, ConfigLoader, RosterConfig};
use crate::employee::commands::EmployeeCommandService;
use crate::employee::{EmployeeDraft, BUILTIN_DEPARTMENTS};
use crate::error::RosterError;
use crate::export::DEFAULT_EXPORT_FILE;
use crate::query::{RowFilter, StatusFilter};
use crate::store::{CollectionStorage, EmployeeStore, SledCollectionStorage};
use crate::tooling::format;
use crate::types::EmployeeId;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Roster CLI - Local-first employee records dashboard
#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Local-first employee records dashboard for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Database directory (overrides configured storage path)
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List employees, optionally filtered
    List {
        /// Filter by name substring (case-insensitive)
        #[arg(long)]
        name: Option<String>,
        /// Filter by exact department
        #[arg(long)]
        department: Option<String>,
        /// Filter by status
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show one employee
    Show {
        /// Employee id
        id: EmployeeId,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Add a new employee
    Add {
        /// Employee name
        #[arg(long)]
        name: Option<String>,
        /// Department
        #[arg(long)]
        department: Option<String>,
        /// Role
        #[arg(long)]
        role: Option<String>,
        /// Salary
        #[arg(long)]
        salary: Option<f64>,
        /// Active flag (true or false; new employees default to inactive)
        #[arg(long)]
        active: Option<bool>,
        /// Use interactive mode (default)
        #[arg(long)]
        interactive: bool,
        /// Use non-interactive mode (use flags)
        #[arg(long)]
        non_interactive: bool,
    },
    /// Edit an existing employee
    Edit {
        /// Employee id
        id: EmployeeId,
        /// Update name
        #[arg(long)]
        name: Option<String>,
        /// Update department
        #[arg(long)]
        department: Option<String>,
        /// Update role
        #[arg(long)]
        role: Option<String>,
        /// Update salary
        #[arg(long)]
        salary: Option<f64>,
        /// Update active flag (true or false)
        #[arg(long)]
        active: Option<bool>,
    },
    /// Remove an employee
    Remove {
        /// Employee id
        id: EmployeeId,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
    /// Export employees as CSV
    Export {
        /// Filter by name substring (case-insensitive)
        #[arg(long)]
        name: Option<String>,
        /// Filter by exact department
        #[arg(long)]
        department: Option<String>,
        /// Filter by status
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
        /// Output file path
        #[arg(long, default_value = DEFAULT_EXPORT_FILE)]
        output: PathBuf,
    },
    /// Show store status
    Status {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Include per-department breakdown
        #[arg(long)]
        breakdown: bool,
    },
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

/// Status filter values accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Active,
    Inactive,
}

impl StatusArg {
    fn as_filter(self) -> StatusFilter {
        match self {
            StatusArg::Active => StatusFilter::Active,
            StatusArg::Inactive => StatusFilter::Inactive,
        }
    }
}

fn row_filter(
    name: Option<&str>,
    department: Option<&str>,
    status: Option<StatusArg>,
) -> RowFilter {
    RowFilter {
        name_text: name.map(|s| s.to_string()),
        department: department.map(|s| s.to_string()),
        status: status.map(StatusArg::as_filter).unwrap_or_default(),
    }
}

/// CLI context owning the open employee store.
pub struct CliContext {
    store: EmployeeStore,
    config_path: Option<PathBuf>,
}

impl CliContext {
    /// Get a reference to the underlying store
    pub fn store(&self) -> &EmployeeStore {
        &self.store
    }

    /// Create a new CLI context, loading configuration first
    pub fn new(
        config_path: Option<PathBuf>,
        db_override: Option<PathBuf>,
    ) -> Result<Self, RosterError> {
        let config = ConfigLoader::load(config_path.as_deref())
            .map_err(|e| RosterError::Config(format!("Failed to load config: {}", e)))?;
        Self::with_config(config, config_path, db_override)
    }

    /// Create a CLI context from an already-loaded configuration
    pub fn with_config(
        config: RosterConfig,
        config_path: Option<PathBuf>,
        db_override: Option<PathBuf>,
    ) -> Result<Self, RosterError> {
        let db_path = match db_override {
            Some(path) => path,
            None => config.storage.resolve_db_path()?,
        };
        debug!(db_path = %db_path.display(), "Opening employee store");
        let storage: Arc<dyn CollectionStorage> =
            Arc::new(SledCollectionStorage::open(&db_path)?);
        let store = if config.seed.enabled {
            EmployeeStore::open(storage)
        } else {
            EmployeeStore::open_unseeded(storage)
        };
        Ok(Self { store, config_path })
    }

    /// Execute a CLI command
    pub fn execute(&mut self, command: &Commands) -> Result<String, RosterError> {
        match command {
            Commands::List {
                name,
                department,
                status,
                format,
            } => self.handle_list(name.as_deref(), department.as_deref(), *status, format),
            Commands::Show { id, format } => self.handle_show(*id, format),
            Commands::Add {
                name,
                department,
                role,
                salary,
                active,
                interactive,
                non_interactive,
            } => self.handle_add(
                name.as_deref(),
                department.as_deref(),
                role.as_deref(),
                *salary,
                *active,
                *interactive,
                *non_interactive,
            ),
            Commands::Edit {
                id,
                name,
                department,
                role,
                salary,
                active,
            } => self.handle_edit(
                *id,
                name.as_deref(),
                department.as_deref(),
                role.as_deref(),
                *salary,
                *active,
            ),
            Commands::Remove { id, force } => self.handle_remove(*id, *force),
            Commands::Export {
                name,
                department,
                status,
                output,
            } => self.handle_export(name.as_deref(), department.as_deref(), *status, output),
            Commands::Status { format, breakdown } => self.handle_status(format, *breakdown),
            Commands::Init { force } => self.handle_init(*force),
        }
    }

    /// Handle the list command
    fn handle_list(
        &self,
        name: Option<&str>,
        department: Option<&str>,
        status: Option<StatusArg>,
        format: &str,
    ) -> Result<String, RosterError> {
        let filter = row_filter(name, department, status);
        let result = EmployeeCommandService::list(&self.store, &filter)?;
        match format {
            "json" => format::to_json_pretty(&result),
            _ => Ok(format::format_list_text(&result)),
        }
    }

    /// Handle the show command
    fn handle_show(&self, id: EmployeeId, format: &str) -> Result<String, RosterError> {
        let result = EmployeeCommandService::show(&self.store, id)?;
        match format {
            "json" => format::to_json_pretty(&result.employee),
            _ => Ok(format::format_employee_text(&result.employee)),
        }
    }

    /// Handle the add command
    fn handle_add(
        &mut self,
        name: Option<&str>,
        department: Option<&str>,
        role: Option<&str>,
        salary: Option<f64>,
        active: Option<bool>,
        interactive: bool,
        non_interactive: bool,
    ) -> Result<String, RosterError> {
        // Interactive unless flags are supplied or it is disabled outright.
        let is_interactive = interactive || (!non_interactive && name.is_none());

        let draft = if is_interactive {
            self.prompt_draft(None)?
        } else {
            EmployeeDraft {
                name: name
                    .ok_or_else(|| {
                        RosterError::Config(
                            "Name is required in non-interactive mode. Use --name <name>"
                                .to_string(),
                        )
                    })?
                    .to_string(),
                department: department
                    .ok_or_else(|| {
                        RosterError::Config(
                            "Department is required in non-interactive mode. Use --department <department>"
                                .to_string(),
                        )
                    })?
                    .to_string(),
                role: role
                    .ok_or_else(|| {
                        RosterError::Config(
                            "Role is required in non-interactive mode. Use --role <role>"
                                .to_string(),
                        )
                    })?
                    .to_string(),
                salary: salary.ok_or_else(|| {
                    RosterError::Config(
                        "Salary is required in non-interactive mode. Use --salary <salary>"
                            .to_string(),
                    )
                })?,
                status: active.unwrap_or(false),
            }
        };

        let result = EmployeeCommandService::add(&mut self.store, draft)?;
        Ok(format!(
            "Employee added!\n\n{}",
            format::format_employee_text(&result.employee)
        ))
    }

    /// Handle the edit command
    fn handle_edit(
        &mut self,
        id: EmployeeId,
        name: Option<&str>,
        department: Option<&str>,
        role: Option<&str>,
        salary: Option<f64>,
        active: Option<bool>,
    ) -> Result<String, RosterError> {
        let current = self
            .store
            .get(id)
            .map(|employee| employee.draft())
            .ok_or(RosterError::NotFound(id))?;

        let has_flags = name.is_some()
            || department.is_some()
            || role.is_some()
            || salary.is_some()
            || active.is_some();

        let draft = if has_flags {
            let mut draft = current;
            if let Some(value) = name {
                draft.name = value.to_string();
            }
            if let Some(value) = department {
                draft.department = value.to_string();
            }
            if let Some(value) = role {
                draft.role = value.to_string();
            }
            if let Some(value) = salary {
                draft.salary = value;
            }
            if let Some(value) = active {
                draft.status = value;
            }
            draft
        } else {
            self.prompt_draft(Some(&current))?
        };

        let result = EmployeeCommandService::edit(&mut self.store, id, draft)?;
        Ok(format!(
            "Employee updated!\n\n{}",
            format::format_employee_text(&result.employee)
        ))
    }

    /// Handle the remove command
    fn handle_remove(&mut self, id: EmployeeId, force: bool) -> Result<String, RosterError> {
        let name = self
            .store
            .get(id)
            .map(|employee| employee.name.clone())
            .ok_or(RosterError::NotFound(id))?;

        if !force {
            use dialoguer::Confirm;
            let confirmed = Confirm::new()
                .with_prompt(format!("Are you sure you want to delete {}?", name))
                .interact()
                .map_err(|e| RosterError::Config(format!("Failed to get user input: {}", e)))?;

            if !confirmed {
                return Ok("Removal cancelled".to_string());
            }
        }

        let result = EmployeeCommandService::remove(&mut self.store, id)?;
        Ok(format!("{} has been deleted!", result.removed.name))
    }

    /// Handle the export command
    fn handle_export(
        &self,
        name: Option<&str>,
        department: Option<&str>,
        status: Option<StatusArg>,
        output: &PathBuf,
    ) -> Result<String, RosterError> {
        let filter = row_filter(name, department, status);
        let result = EmployeeCommandService::export(&self.store, &filter, output)?;
        Ok(format::format_export_text(&result))
    }

    /// Handle the status command
    fn handle_status(&self, format: &str, breakdown: bool) -> Result<String, RosterError> {
        let report = EmployeeCommandService::status(&self.store, breakdown)?;
        match format {
            "json" => format::to_json_pretty(&report),
            _ => Ok(format::format_status_text(&report)),
        }
    }

    /// Handle the init command
    fn handle_init(&self, force: bool) -> Result<String, RosterError> {
        let path = match &self.config_path {
            Some(path) => path.clone(),
            None => xdg::config_file()?,
        };
        if path.exists() && !force {
            return Ok(format!(
                "Configuration already exists at {}. Use --force to overwrite.",
                path.display()
            ));
        }
        ConfigLoader::write_default(&path)?;
        Ok(format!("Wrote default configuration to {}", path.display()))
    }

    /// Interactive draft entry, pre-filled from the current record when editing
    fn prompt_draft(&self, current: Option<&EmployeeDraft>) -> Result<EmployeeDraft, RosterError> {
        use dialoguer::{Confirm, Input, Select};

        let mut name_input = Input::new().with_prompt("Employee name");
        if let Some(draft) = current {
            name_input = name_input.with_initial_text(draft.name.clone());
        }
        let name: String = name_input
            .interact_text()
            .map_err(|e| RosterError::Config(format!("Failed to get user input: {}", e)))?;

        // Offer the built-in departments, plus the current one when it is
        // not in the list.
        let mut departments: Vec<String> =
            BUILTIN_DEPARTMENTS.iter().map(|d| d.to_string()).collect();
        if let Some(draft) = current {
            if !departments.contains(&draft.department) {
                departments.push(draft.department.clone());
            }
        }
        let default_index = current
            .and_then(|draft| departments.iter().position(|d| *d == draft.department))
            .unwrap_or(0);
        let selection = Select::new()
            .with_prompt("Department")
            .items(&departments)
            .default(default_index)
            .interact()
            .map_err(|e| RosterError::Config(format!("Failed to get user input: {}", e)))?;
        let department = departments[selection].clone();

        let mut role_input = Input::new().with_prompt("Role");
        if let Some(draft) = current {
            role_input = role_input.with_initial_text(draft.role.clone());
        }
        let role: String = role_input
            .interact_text()
            .map_err(|e| RosterError::Config(format!("Failed to get user input: {}", e)))?;

        let mut salary_input = Input::new().with_prompt("Salary");
        if let Some(draft) = current {
            salary_input = salary_input.default(draft.salary);
        }
        let salary: f64 = salary_input
            .interact_text()
            .map_err(|e| RosterError::Config(format!("Failed to get user input: {}", e)))?;

        let status = Confirm::new()
            .with_prompt("Active employee?")
            .default(current.map(|draft| draft.status).unwrap_or(false))
            .interact()
            .map_err(|e| RosterError::Config(format!("Failed to get user input: {}", e)))?;

        Ok(EmployeeDraft {
            name,
            department,
            role,
            salary,
            status,
        })
    }
}
