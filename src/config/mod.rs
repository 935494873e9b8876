//! Configuration: TOML settings, logging setup and environment credentials.

mod credentials;
mod logging;
mod settings;

pub use credentials::{
    CredentialPresence, Credentials, CLIENT_ID_VAR, CLIENT_SECRET_VAR, REFRESH_TOKEN_VAR,
};
pub use logging::LoggingConfig;
pub use settings::{Config, ReserveConfig};
