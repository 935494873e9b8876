//! Reserve update orchestration.
//!
//! Runs the fixed call chain authenticate → products → site status →
//! backup, each step awaited before the next. Any failure aborts the whole
//! invocation; nothing is retried.

use tracing::{debug, error, info, warn};

use crate::config::{Credentials, ReserveConfig};
use crate::domain::{
    battery_sites, select_site, AccessToken, EnergySite, InvocationRequest, ReserveAck,
    ReserveOutcome, ReservePercent, SiteStatus,
};
use crate::error::{Error, Result};
use crate::port::EnergyApi;

/// A selected site together with its current readings.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSnapshot {
    pub site: EnergySite,
    pub status: SiteStatus,
}

/// Drives one backup reserve update against an [`EnergyApi`].
pub struct ReserveOrchestrator<A> {
    api: A,
    credentials: Credentials,
    config: ReserveConfig,
}

impl<A: EnergyApi> ReserveOrchestrator<A> {
    pub fn new(api: A, credentials: Credentials, config: ReserveConfig) -> Self {
        Self {
            api,
            credentials,
            config,
        }
    }

    /// Set the backup reserve of the account's battery site.
    pub async fn update_backup_reserve(
        &self,
        request: &InvocationRequest,
    ) -> Result<ReserveOutcome> {
        info!(api = self.api.api_name(), "Starting Powerwall backup reserve update");

        let target = request.validate().inspect_err(|e| {
            error!(error = %e, "Rejected invocation");
        })?;
        info!(target = target.value(), "Reserve percent from event");

        let token = self.authenticate().await?;
        let site = self.discover_site(&token).await?;
        let status = self.read_status(&token, &site).await?;

        let ack = self
            .api
            .set_backup_reserve(&token, &site.id, target)
            .await?;
        info!(site_id = %site.id, target = target.value(), "Backup reserve update accepted");
        self.verify_echo(target, ack)?;

        let outcome = ReserveOutcome::new(&site, &status, target);
        info!(
            site = %outcome.site,
            previous_reserve = outcome.previous_reserve,
            new_reserve = outcome.new_reserve,
            current_charge = outcome.current_charge,
            "{}",
            outcome.message
        );
        Ok(outcome)
    }

    /// Read-only variant: locate the site and report its readings.
    pub async fn site_snapshot(&self) -> Result<SiteSnapshot> {
        let token = self.authenticate().await?;
        let site = self.discover_site(&token).await?;
        let status = self.read_status(&token, &site).await?;
        Ok(SiteSnapshot { site, status })
    }

    async fn authenticate(&self) -> Result<AccessToken> {
        let token = self.api.access_token(&self.credentials).await?;
        info!("Authenticated");
        Ok(token)
    }

    async fn discover_site(&self, token: &AccessToken) -> Result<EnergySite> {
        let products = self.api.products(token).await?;
        let sites = battery_sites(products)?;
        if sites.len() > 1 {
            warn!(
                count = sites.len(),
                "Multiple battery sites on account, using the first"
            );
        }

        let site = select_site(sites).inspect_err(|e| error!(error = %e, "Site discovery failed"))?;
        info!(site = %site.name, site_id = %site.id, "Using Powerwall site");
        Ok(site)
    }

    async fn read_status(&self, token: &AccessToken, site: &EnergySite) -> Result<SiteStatus> {
        let status = self.api.site_status(token, &site.id).await?;
        info!(
            current_charge = status.percentage_charged,
            current_reserve = status.backup_reserve_percent,
            "Current site status"
        );
        Ok(status)
    }

    fn verify_echo(&self, target: ReservePercent, ack: ReserveAck) -> Result<()> {
        let Some(echoed) = ack.backup_reserve_percent else {
            debug!("Backup endpoint did not echo the reserve");
            return Ok(());
        };

        if (echoed - f64::from(target.value())).abs() < f64::EPSILON {
            info!(new_reserve = echoed, "New backup reserve confirmed");
            return Ok(());
        }

        if self.config.verify_echo {
            let err = Error::ReserveNotApplied {
                requested: target.value(),
                echoed,
            };
            error!(error = %err, "Echoed reserve does not match request");
            Err(err)
        } else {
            warn!(
                requested = target.value(),
                echoed, "Echoed reserve does not match request"
            );
            Ok(())
        }
    }
}
