//! Wire types for the Tesla owner API.
//!
//! Every field the API might omit is optional here; the `into_*` methods
//! enforce the ones the workflow needs and report a
//! [`MalformedResponse`](crate::error::Error::MalformedResponse) otherwise.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::{Product, ReserveAck, SiteId, SiteStatus};
use crate::error::{Error, Result};

fn malformed(endpoint: &'static str, reason: impl Into<String>) -> Error {
    Error::MalformedResponse {
        endpoint,
        reason: reason.into(),
    }
}

/// Parse a response body, reporting any JSON or shape error as malformed.
pub fn decode<T: DeserializeOwned>(endpoint: &'static str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| malformed(endpoint, e.to_string()))
}

#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    pub grant_type: &'static str,
    pub client_id: &'a str,
    pub refresh_token: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
}

impl TokenResponse {
    pub fn into_token(self) -> Result<String> {
        self.access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| malformed("token", "missing access_token"))
    }
}

/// Site ids arrive as JSON numbers; tolerate strings as well.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SiteIdDto {
    Number(u64),
    Text(String),
}

impl From<SiteIdDto> for SiteId {
    fn from(dto: SiteIdDto) -> Self {
        match dto {
            SiteIdDto::Number(n) => SiteId::new(n.to_string()),
            SiteIdDto::Text(s) => SiteId::new(s),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductDto {
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub energy_site_id: Option<SiteIdDto>,
    #[serde(default)]
    pub site_name: Option<String>,
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Self {
            resource_type: dto.resource_type,
            energy_site_id: dto.energy_site_id.map(SiteId::from),
            site_name: dto.site_name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    pub response: Option<Vec<ProductDto>>,
}

impl ProductsResponse {
    pub fn into_products(self) -> Result<Vec<Product>> {
        let products = self
            .response
            .ok_or_else(|| malformed("products", "missing response array"))?;
        Ok(products.into_iter().map(Product::from).collect())
    }
}

#[derive(Debug, Deserialize)]
pub struct SiteStatusDto {
    pub percentage_charged: Option<f64>,
    pub backup_reserve_percent: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct SiteStatusResponse {
    pub response: Option<SiteStatusDto>,
}

impl SiteStatusResponse {
    pub fn into_status(self) -> Result<SiteStatus> {
        let status = self
            .response
            .ok_or_else(|| malformed("site_status", "missing response object"))?;
        Ok(SiteStatus {
            percentage_charged: status
                .percentage_charged
                .ok_or_else(|| malformed("site_status", "missing percentage_charged"))?,
            backup_reserve_percent: status
                .backup_reserve_percent
                .ok_or_else(|| malformed("site_status", "missing backup_reserve_percent"))?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct BackupRequest {
    pub backup_reserve_percent: u8,
}

#[derive(Debug, Deserialize)]
pub struct BackupDto {
    pub backup_reserve_percent: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct BackupResponse {
    pub response: Option<BackupDto>,
}

impl From<BackupResponse> for ReserveAck {
    fn from(dto: BackupResponse) -> Self {
        Self {
            backup_reserve_percent: dto.response.and_then(|r| r.backup_reserve_percent),
        }
    }
}
