//! XDG Base Directory utilities for roster data.

use crate::error::RosterError;
use std::path::PathBuf;

/// Get XDG config home directory
///
/// Returns `$XDG_CONFIG_HOME` if set, otherwise defaults to `$HOME/.config`
/// Follows XDG Base Directory Specification
pub fn config_home() -> Result<PathBuf, RosterError> {
    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config_home));
    }

    let home = std::env::var("HOME").map_err(|_| {
        RosterError::Config(
            "Could not determine XDG config home directory (HOME not set)".to_string(),
        )
    })?;

    Ok(PathBuf::from(home).join(".config"))
}

/// Get XDG data home directory
///
/// Returns `$XDG_DATA_HOME` if set, otherwise defaults to `$HOME/.local/share`
pub fn data_home() -> Result<PathBuf, RosterError> {
    if let Ok(xdg_data_home) = std::env::var("XDG_DATA_HOME") {
        return Ok(PathBuf::from(xdg_data_home));
    }

    let home = std::env::var("HOME").map_err(|_| {
        RosterError::Config(
            "Could not determine XDG data home directory (HOME not set)".to_string(),
        )
    })?;

    Ok(PathBuf::from(home).join(".local").join("share"))
}

/// Default config file path: `$XDG_CONFIG_HOME/roster/config.toml`
pub fn config_file() -> Result<PathBuf, RosterError> {
    Ok(config_home()?.join("roster").join("config.toml"))
}

/// Default database directory: `$XDG_DATA_HOME/roster/store`
pub fn default_db_path() -> Result<PathBuf, RosterError> {
    Ok(data_home()?.join("roster").join("store"))
}
