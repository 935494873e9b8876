//! Energy API port.

use async_trait::async_trait;

use crate::config::Credentials;
use crate::domain::{AccessToken, Product, ReserveAck, ReservePercent, SiteId, SiteStatus};
use crate::error::Result;

/// Remote operations the reserve workflow needs from the vendor API.
///
/// Each method is one HTTP call. Implementations map non-success responses
/// to the matching [`Error`](crate::error::Error) variant and never retry.
#[async_trait]
pub trait EnergyApi: Send + Sync {
    /// Exchange the refresh token for a bearer access token.
    async fn access_token(&self, credentials: &Credentials) -> Result<AccessToken>;

    /// List every product on the account.
    async fn products(&self, token: &AccessToken) -> Result<Vec<Product>>;

    /// Read charge and reserve for one site.
    async fn site_status(&self, token: &AccessToken, site_id: &SiteId) -> Result<SiteStatus>;

    /// Set the site's backup reserve.
    async fn set_backup_reserve(
        &self,
        token: &AccessToken,
        site_id: &SiteId,
        percent: ReservePercent,
    ) -> Result<ReserveAck>;

    /// API name for logging.
    fn api_name(&self) -> &'static str;
}
