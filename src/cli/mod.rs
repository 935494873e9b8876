//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod set;
pub mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;

/// Set the backup reserve of a Tesla Powerwall site.
#[derive(Parser, Debug)]
#[command(name = "powerwall-reserve")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (optional; defaults apply when missing)
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override log level (debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set the backup reserve percentage
    Set(SetArgs),

    /// Show the selected site's charge and backup reserve
    Status,

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `powerwall-reserve check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file and credential environment
    Config,
}

/// Arguments for the `set` subcommand.
///
/// The target comes from exactly one of: the positional percent, an inline
/// JSON event, or a JSON event file.
#[derive(Parser, Debug)]
pub struct SetArgs {
    /// Target backup reserve percentage (0-100)
    #[arg(allow_negative_numbers = true, conflicts_with_all = ["event", "event_file"])]
    pub percent: Option<i64>,

    /// Invocation payload as JSON, e.g. '{"reservePercent": 20}'
    #[arg(long, conflicts_with = "event_file")]
    pub event: Option<String>,

    /// Path to a file holding the JSON invocation payload
    #[arg(long)]
    pub event_file: Option<PathBuf>,
}

impl Cli {
    /// Load configuration, apply CLI overrides and initialize logging.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_or_default(&self.config)?;

        if let Some(ref level) = self.log_level {
            config.logging.level = level.clone();
        }
        if self.json_logs {
            config.logging.format = "json".to_string();
        }

        config.init_logging();
        Ok(config)
    }
}
