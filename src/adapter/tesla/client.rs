//! Tesla owner API client.
//!
//! One HTTP call per [`EnergyApi`] method, bearer-authenticated, no retries
//! and transport-default timeouts.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use tracing::{debug, error, info, warn};
use url::Url;

use super::dto::{
    decode, BackupRequest, BackupResponse, ProductsResponse, SiteStatusResponse, TokenRequest,
    TokenResponse,
};
use crate::config::Credentials;
use crate::domain::{AccessToken, Product, ReserveAck, ReservePercent, SiteId, SiteStatus};
use crate::error::{Error, Result};
use crate::port::EnergyApi;

const AUTH_URL: &str = "https://auth.tesla.com/oauth2/v3/token";
const API_URL: &str = "https://owner-api.teslamotors.com/api/1";

/// HTTP client for the Tesla owner API.
pub struct TeslaClient {
    client: Client,
    auth_url: String,
    api_url: String,
}

impl TeslaClient {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            auth_url: AUTH_URL.to_string(),
            api_url: API_URL.to_string(),
        }
    }

    /// Point the client at another token endpoint and API root, e.g. a
    /// local test server. System proxies are bypassed.
    #[cfg(any(test, feature = "testkit"))]
    pub fn with_base_urls(
        auth_url: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            client: Client::builder().no_proxy().build()?,
            auth_url: auth_url.into(),
            api_url: api_url.into(),
        })
    }

    /// Build `<api root>/<segments...>` with each segment percent-encoded.
    fn api_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.api_url)?;
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .extend(segments);
        Ok(url)
    }

    async fn send(request: RequestBuilder, url: &str) -> Result<Response> {
        let response = request
            .send()
            .await
            .inspect_err(|e| error!(error = %e, url, "Request failed"))?;
        Ok(response)
    }

    async fn read_body(response: Response, url: &str) -> Result<String> {
        let body = response
            .text()
            .await
            .inspect_err(|e| error!(error = %e, url, "Failed to read response body"))?;
        Ok(body)
    }
}

impl Default for TeslaClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Status line as shown to operators, e.g. `403 Forbidden`.
fn status_text(response: &Response) -> String {
    response.status().to_string()
}

#[async_trait]
impl EnergyApi for TeslaClient {
    fn api_name(&self) -> &'static str {
        "tesla"
    }

    async fn access_token(&self, credentials: &Credentials) -> Result<AccessToken> {
        let url = self.auth_url.as_str();
        info!(url, "Requesting access token");

        let body = TokenRequest {
            grant_type: "refresh_token",
            client_id: credentials.client_id(),
            refresh_token: credentials.refresh_token(),
        };
        let response = Self::send(self.client.post(url).json(&body), url).await?;

        if !response.status().is_success() {
            let status = status_text(&response);
            error!(status = %status, "Authentication failed");
            return Err(Error::Authentication { status });
        }

        let body = Self::read_body(response, url).await?;
        let token = decode::<TokenResponse>("token", &body)?.into_token()?;
        debug!("Access token received");
        Ok(AccessToken::new(token))
    }

    async fn products(&self, token: &AccessToken) -> Result<Vec<Product>> {
        let url = self.api_url(&["products"])?;
        info!(url = %url, "Fetching products");

        let request = self.client.get(url.clone()).bearer_auth(token.secret());
        let response = Self::send(request, url.as_str()).await?;

        if !response.status().is_success() {
            let status = status_text(&response);
            error!(status = %status, "Failed to get products");
            return Err(Error::SiteList { status });
        }

        let body = Self::read_body(response, url.as_str()).await?;
        let products = decode::<ProductsResponse>("products", &body)?.into_products()?;
        debug!(count = products.len(), "Fetched products");
        Ok(products)
    }

    async fn site_status(&self, token: &AccessToken, site_id: &SiteId) -> Result<SiteStatus> {
        let url = self.api_url(&["energy_sites", site_id.as_str(), "site_status"])?;
        info!(site_id = %site_id, "Fetching site status");

        let request = self.client.get(url.clone()).bearer_auth(token.secret());
        let response = Self::send(request, url.as_str()).await?;

        if !response.status().is_success() {
            let status = status_text(&response);
            error!(site_id = %site_id, status = %status, "Failed to get site status");
            return Err(Error::StatusRead { status });
        }

        let body = Self::read_body(response, url.as_str()).await?;
        let status = decode::<SiteStatusResponse>("site_status", &body)?.into_status()?;
        debug!(
            site_id = %site_id,
            percentage_charged = status.percentage_charged,
            backup_reserve_percent = status.backup_reserve_percent,
            "Fetched site status"
        );
        Ok(status)
    }

    async fn set_backup_reserve(
        &self,
        token: &AccessToken,
        site_id: &SiteId,
        percent: ReservePercent,
    ) -> Result<ReserveAck> {
        let url = self.api_url(&["energy_sites", site_id.as_str(), "backup"])?;
        info!(site_id = %site_id, percent = percent.value(), "Setting backup reserve");

        let request = self
            .client
            .post(url.clone())
            .bearer_auth(token.secret())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&BackupRequest {
                backup_reserve_percent: percent.value(),
            });
        let response = Self::send(request, url.as_str()).await?;

        if !response.status().is_success() {
            let status = status_text(&response);
            let body = response.text().await.unwrap_or_else(|e| {
                warn!(error = %e, "Failed to read error body");
                format!("<body unreadable: {e}>")
            });
            error!(
                site_id = %site_id,
                status = %status,
                body = %body,
                requested_percent = percent.value(),
                "Backup reserve API error"
            );
            return Err(Error::ReserveUpdate { status, body });
        }

        let body = Self::read_body(response, url.as_str()).await?;
        let ack = ReserveAck::from(decode::<BackupResponse>("backup", &body)?);
        debug!(
            site_id = %site_id,
            echoed = ?ack.backup_reserve_percent,
            "Backup reserve update accepted"
        );
        Ok(ack)
    }
}
