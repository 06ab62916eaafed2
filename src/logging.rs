//! Structured logging for the roster CLI.
//!
//! Built on `tracing` with a configurable level filter, json or text
//! records, and console or file destinations.

use crate::error::RosterError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Master switch; false suppresses all log output (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Minimum level: trace, debug, info, warn, error, off
    #[serde(default = "default_level")]
    pub level: String,

    /// Record format, json or text (default: text)
    #[serde(default = "default_text")]
    pub format: String,

    /// Destination: stdout, stderr, file, file+stderr, both
    #[serde(default = "default_file_output")]
    pub output: String,

    /// Explicit log file path; None resolves a platform default at startup
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Colored text output on console destinations
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_text() -> String {
    "text".to_string()
}

fn default_file_output() -> String {
    "file".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_level(),
            format: default_text(),
            output: default_file_output(),
            file: None,
            color: true,
        }
    }
}

/// Install the global tracing subscriber.
///
/// Each setting is taken from its ROSTER_LOG* environment variable when
/// set, otherwise from `config`, otherwise from the defaults. The CLI
/// exports its --log-* flags as those variables before calling in, so
/// flags outrank the config file without a second plumbing path.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), RosterError> {
    if config.map(|c| !c.enabled).unwrap_or(false) {
        Registry::default().with(EnvFilter::new("off")).init();
        return Ok(());
    }

    let filter = build_env_filter(config);
    let format = determine_format(config)?;
    let output = determine_output(config)?;

    let log_file = resolve_log_file_path(config.and_then(|c| c.file.clone())).ok();
    let writer = make_writer(&output, log_file.as_deref())?;

    // Color only makes sense for text on a console; file output always
    // gets plain text.
    let use_color = config.map(|c| c.color).unwrap_or(true) && !output.file;

    let base_subscriber = Registry::default().with(filter);
    if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .init();
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(writer),
            )
            .init();
    }

    Ok(())
}

/// ROSTER_LOG accepts full `tracing_subscriber` directive syntax and
/// overrides the configured level entirely.
fn build_env_filter(config: Option<&LoggingConfig>) -> EnvFilter {
    EnvFilter::try_from_env("ROSTER_LOG").unwrap_or_else(|_| {
        let level = config.map(|c| c.level.as_str()).unwrap_or("info");
        EnvFilter::new(level)
    })
}

fn determine_format(config: Option<&LoggingConfig>) -> Result<String, RosterError> {
    let format = std::env::var("ROSTER_LOG_FORMAT")
        .unwrap_or_else(|_| config.map(|c| c.format.clone()).unwrap_or_else(default_text));
    match format.as_str() {
        "json" | "text" => Ok(format),
        other => Err(RosterError::Config(format!(
            "Unknown log format '{}': expected 'json' or 'text'",
            other
        ))),
    }
}

/// Which sinks the subscriber writes to.
struct OutputDestinations {
    stdout: bool,
    stderr: bool,
    file: bool,
}

fn determine_output(config: Option<&LoggingConfig>) -> Result<OutputDestinations, RosterError> {
    let output = std::env::var("ROSTER_LOG_OUTPUT").unwrap_or_else(|_| {
        config
            .map(|c| c.output.clone())
            .unwrap_or_else(default_file_output)
    });
    parse_output_destinations(&output)
}

fn parse_output_destinations(output: &str) -> Result<OutputDestinations, RosterError> {
    let (stdout, stderr, file) = match output {
        "stdout" => (true, false, false),
        "stderr" => (false, true, false),
        "file" => (false, false, true),
        "file+stderr" => (false, true, true),
        "both" => (true, true, false),
        other => {
            return Err(RosterError::Config(format!(
                "Unknown log output '{}': expected 'stdout', 'stderr', 'file', 'file+stderr', or 'both'",
                other
            )))
        }
    };
    Ok(OutputDestinations {
        stdout,
        stderr,
        file,
    })
}

/// Combine the requested destinations into a single writer.
fn make_writer(
    output: &OutputDestinations,
    log_file: Option<&Path>,
) -> Result<BoxMakeWriter, RosterError> {
    if output.file {
        let path = log_file.ok_or_else(|| {
            RosterError::Config("Log file path not set and default resolution failed".to_string())
        })?;
        let file = open_log_file(path)?;
        if output.stderr {
            Ok(BoxMakeWriter::new(file.and(std::io::stderr)))
        } else {
            Ok(BoxMakeWriter::new(file))
        }
    } else if output.stdout && output.stderr {
        Ok(BoxMakeWriter::new(std::io::stdout.and(std::io::stderr)))
    } else if output.stderr {
        Ok(BoxMakeWriter::new(std::io::stderr))
    } else {
        Ok(BoxMakeWriter::new(std::io::stdout))
    }
}

fn open_log_file(path: &Path) -> Result<std::fs::File, RosterError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| RosterError::Config(format!("Failed to create log directory: {}", e)))?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| RosterError::Config(format!("Failed to open log file {:?}: {}", path, e)))
}

/// Pick the log file: ROSTER_LOG_FILE, then the config entry, then a
/// per-user state directory. Empty values fall through.
fn resolve_log_file_path(config_file: Option<PathBuf>) -> Result<PathBuf, RosterError> {
    let env_file = std::env::var("ROSTER_LOG_FILE").ok().map(PathBuf::from);
    env_file
        .into_iter()
        .chain(config_file)
        .find(|p| !p.as_os_str().is_empty())
        .map(Ok)
        .unwrap_or_else(default_log_file_path)
}

fn default_log_file_path() -> Result<PathBuf, RosterError> {
    let dirs = directories::ProjectDirs::from("", "roster", "roster").ok_or_else(|| {
        RosterError::Config("Could not determine platform state directory for log file".to_string())
    })?;
    // macOS and Windows have no state dir; land in the data dir there.
    let base = dirs.state_dir().unwrap_or_else(|| dirs.data_dir());
    Ok(base.join("roster.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::default();
        assert!(config.enabled && config.color);
        assert_eq!(
            (config.level.as_str(), config.format.as_str(), config.output.as_str()),
            ("info", "text", "file")
        );
        assert!(config.file.is_none());
    }

    #[test]
    fn test_output_destination_combos() {
        for (spec, expected) in [
            ("stdout", (true, false, false)),
            ("stderr", (false, true, false)),
            ("file", (false, false, true)),
            ("file+stderr", (false, true, true)),
            ("both", (true, true, false)),
        ] {
            let out = parse_output_destinations(spec).unwrap();
            assert_eq!((out.stdout, out.stderr, out.file), expected, "spec: {}", spec);
        }
    }

    #[test]
    fn test_unknown_output_rejected() {
        assert!(parse_output_destinations("syslog").is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let config = LoggingConfig {
            format: "yaml".to_string(),
            ..LoggingConfig::default()
        };
        assert!(determine_format(Some(&config)).is_err());
    }

    #[test]
    fn test_make_writer_requires_path_for_file_output() {
        let output = parse_output_destinations("file").unwrap();
        assert!(make_writer(&output, None).is_err());
    }

    #[test]
    fn test_make_writer_console_destinations_need_no_path() {
        for spec in ["stdout", "stderr", "both"] {
            let output = parse_output_destinations(spec).unwrap();
            assert!(make_writer(&output, None).is_ok(), "spec: {}", spec);
        }
    }

    #[test]
    fn test_log_file_config_entry_wins_over_default() {
        let configured = resolve_log_file_path(Some(PathBuf::from("/tmp/roster-test.log")));
        assert_eq!(configured.unwrap(), PathBuf::from("/tmp/roster-test.log"));
    }

    #[test]
    fn test_log_file_empty_config_entry_falls_through() {
        let resolved = resolve_log_file_path(Some(PathBuf::new())).unwrap();
        assert_eq!(resolved.file_name().unwrap(), "roster.log");
        assert!(resolved.is_absolute());
    }

    #[test]
    fn test_log_file_default_is_per_user_state_path() {
        let resolved = resolve_log_file_path(None).unwrap();
        assert_eq!(resolved.file_name().unwrap(), "roster.log");
        assert!(resolved.is_absolute());
    }
}
