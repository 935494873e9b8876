use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("authentication failed: {status}")]
    Authentication { status: String },

    #[error("failed to get products: {status}")]
    SiteList { status: String },

    #[error("no Powerwall systems found in account")]
    NoSiteFound,

    #[error("failed to get site status: {status}")]
    StatusRead { status: String },

    #[error("failed to set backup reserve: {status} - {body}")]
    ReserveUpdate { status: String, body: String },

    #[error("malformed response from {endpoint}: {reason}")]
    MalformedResponse {
        endpoint: &'static str,
        reason: String,
    },

    #[error("backup reserve not applied: requested {requested}%, site reports {echoed}%")]
    ReserveNotApplied { requested: u8, echoed: f64 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserve_update_message_carries_status_and_body() {
        let err = Error::ReserveUpdate {
            status: "403 Forbidden".into(),
            body: "insufficient permissions".into(),
        };
        let message = err.to_string();
        assert!(message.contains("403 Forbidden"));
        assert!(message.contains("insufficient permissions"));
    }

    #[test]
    fn config_error_is_transparent() {
        let err: Error = ConfigError::MissingField {
            field: "TESLA_CLIENT_ID",
        }
        .into();
        assert_eq!(err.to_string(), "missing required field: TESLA_CLIENT_ID");
    }
}
