//! Tesla API credentials.
//!
//! Secrets are read from the environment once, at startup, and handed to
//! the orchestrator as an explicit value. They are never read from the
//! config file and never written to logs.

use std::fmt;

use crate::error::ConfigError;

pub const REFRESH_TOKEN_VAR: &str = "TESLA_REFRESH_TOKEN";
pub const CLIENT_ID_VAR: &str = "TESLA_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "TESLA_CLIENT_SECRET";

/// The three secrets needed to mint an access token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    refresh_token: String,
    client_id: String,
    client_secret: String,
}

impl Credentials {
    /// Build credentials, rejecting any value that is absent or blank.
    pub fn new(
        refresh_token: Option<String>,
        client_id: Option<String>,
        client_secret: Option<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            refresh_token: required(refresh_token, REFRESH_TOKEN_VAR)?,
            client_id: required(client_id, CLIENT_ID_VAR)?,
            client_secret: required(client_secret, CLIENT_SECRET_VAR)?,
        })
    }

    /// Load credentials from `TESLA_REFRESH_TOKEN`, `TESLA_CLIENT_ID` and
    /// `TESLA_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load credentials through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::new(
            lookup(REFRESH_TOKEN_VAR),
            lookup(CLIENT_ID_VAR),
            lookup(CLIENT_SECRET_VAR),
        )
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("refresh_token", &"<redacted>")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingField { field }),
    }
}

/// Which credential variables are set, without exposing their values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialPresence {
    pub refresh_token: bool,
    pub client_id: bool,
    pub client_secret: bool,
}

impl CredentialPresence {
    pub fn from_env() -> Self {
        let present = |name: &str| std::env::var(name).is_ok_and(|v| !v.trim().is_empty());
        Self {
            refresh_token: present(REFRESH_TOKEN_VAR),
            client_id: present(CLIENT_ID_VAR),
            client_secret: present(CLIENT_SECRET_VAR),
        }
    }

    pub const fn complete(&self) -> bool {
        self.refresh_token && self.client_id && self.client_secret
    }
}
