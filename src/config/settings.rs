//! Application configuration loading and validation.
//!
//! The TOML file only carries non-secret settings. Credentials come from the
//! environment, see [`Credentials`](super::Credentials).
//!
//! ```toml
//! [logging]
//! level = "info"
//! format = "pretty"
//!
//! [reserve]
//! verify_echo = true
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::logging::LoggingConfig;
use crate::error::{ConfigError, Result};

const fn default_true() -> bool {
    true
}

/// Behaviour of the reserve update itself.
#[derive(Debug, Clone, Deserialize)]
pub struct ReserveConfig {
    /// Fail when the reserve echoed back by the site differs from the
    /// requested value. When disabled the mismatch is only logged.
    #[serde(default = "default_true")]
    pub verify_echo: bool,
}

impl Default for ReserveConfig {
    fn default() -> Self {
        Self {
            verify_echo: default_true(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub reserve: ReserveConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration from `path` if it exists, defaults otherwise.
    ///
    /// The config file is optional for a scheduled run; a file that exists
    /// but fails to parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        self.logging.validate()?;
        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
