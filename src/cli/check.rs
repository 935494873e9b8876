//! Handler for `check config`.

use std::path::Path;

use crate::cli::output;
use crate::config::{
    Config, CredentialPresence, CLIENT_ID_VAR, CLIENT_SECRET_VAR, REFRESH_TOKEN_VAR,
};
use crate::error::{ConfigError, Result};

/// Validate the configuration file and report which credentials are set.
///
/// Secret values are never printed. Fails when the file is invalid or any
/// credential is missing.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    output::section("Configuration");

    let config = Config::load_or_default(path)?;
    if path.exists() {
        output::ok(&format!("Configuration file is valid: {}", path.display()));
    } else {
        output::warn(&format!("No config file at {}, using defaults", path.display()));
    }
    output::key_value("Log level:", &config.logging.level);
    output::key_value("Log format:", &config.logging.format);
    output::key_value("Verify echo:", config.reserve.verify_echo);

    output::section("Credentials");
    let presence = CredentialPresence::from_env();
    let checks = [
        (REFRESH_TOKEN_VAR, presence.refresh_token),
        (CLIENT_ID_VAR, presence.client_id),
        (CLIENT_SECRET_VAR, presence.client_secret),
    ];
    for (name, present) in checks {
        if present {
            output::ok(&format!("{name} is set"));
        } else {
            output::error(&format!("{name} is not set"));
        }
    }

    if presence.complete() {
        return Ok(());
    }
    let field = checks
        .iter()
        .find(|(_, present)| !*present)
        .map_or(REFRESH_TOKEN_VAR, |(name, _)| *name);
    Err(ConfigError::MissingField { field }.into())
}
