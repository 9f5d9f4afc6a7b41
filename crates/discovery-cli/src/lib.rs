//! Discovery CLI
//!
//! Command-line front end over the scoring engine. Reads a JSON snapshot
//! of ideas and hypotheses, prints results as text or JSON.
//!
//! # Commands
//!
//! - `score`: RICE score and priority band for explicit inputs
//! - `matrix`: Impact/effort quadrants
//! - `progress`: Per-idea and overall validation progress
//! - `rank`: Sorted, optionally filtered idea list
//! - `stats`: Dashboard counters
//! - `reconcile`: Ideas whose stored score no longer matches their inputs

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod cli;
mod commands;
pub mod config;
pub mod logging;

// Re-exports
pub use cli::build_cli;
pub use commands::execute;
pub use config::{ConfigError, EngineConfig, LogFormat, LoggingConfig};

use clap::ArgMatches;
use std::path::PathBuf;

/// Load configuration and apply command-line overrides
///
/// `--log-format` replaces the configured format; `-v` raises the level.
///
/// # Errors
/// Returns error if the config file cannot be read or is invalid
pub fn resolve_config(matches: &ArgMatches) -> Result<EngineConfig, ConfigError> {
    let path = matches.get_one::<PathBuf>("config");
    let mut config = EngineConfig::load(path.map(PathBuf::as_path))?;

    if let Some(format) = matches.get_one::<LogFormat>("log-format") {
        config = config.with_log_format(*format);
    }
    if let Some(level) = logging::verbosity_level(matches.get_count("verbose")) {
        config = config.with_log_level(level);
    }
    Ok(config)
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
