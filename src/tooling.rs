//! Tooling Layer
//!
//! CLI entry points and terminal output formatting for the roster dashboard.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands, StatusArg};
