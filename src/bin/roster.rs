//! Roster CLI Binary
//!
//! Command-line interface for the roster employee records dashboard.

use clap::Parser;
use roster::config::ConfigLoader;
use roster::logging::init_logging;
use roster::tooling::cli::{Cli, CliContext};
use std::process;

/// Export CLI log flags as environment variables so they take precedence
/// over the configuration file inside the logging setup.
fn export_log_flags(cli: &Cli) {
    if let Some(level) = &cli.log_level {
        std::env::set_var("ROSTER_LOG", level);
    }
    if let Some(format) = &cli.log_format {
        std::env::set_var("ROSTER_LOG_FORMAT", format);
    }
    if let Some(output) = &cli.log_output {
        std::env::set_var("ROSTER_LOG_OUTPUT", output);
    }
    if let Some(file) = &cli.log_file {
        std::env::set_var("ROSTER_LOG_FILE", file.display().to_string());
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    export_log_flags(&cli);
    if let Err(e) = init_logging(Some(&config.logging)) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    // Create CLI context
    let mut context = match CliContext::with_config(config, cli.config.clone(), cli.db.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error opening employee store: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
