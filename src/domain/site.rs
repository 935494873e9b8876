//! Energy sites, the product list they come from, and site status.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Product `resource_type` that marks a battery storage site.
pub const BATTERY_RESOURCE_TYPE: &str = "battery";

/// Opaque energy site identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SiteId(String);

impl SiteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the account's product list (vehicle, battery, solar...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Product {
    pub resource_type: Option<String>,
    pub energy_site_id: Option<SiteId>,
    pub site_name: Option<String>,
}

impl Product {
    pub fn is_battery(&self) -> bool {
        self.resource_type.as_deref() == Some(BATTERY_RESOURCE_TYPE)
    }
}

/// A battery storage installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnergySite {
    pub id: SiteId,
    pub name: String,
}

impl EnergySite {
    pub fn new(id: SiteId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Keep only battery products, in the order the API returned them.
///
/// A battery entry without an `energy_site_id` is a malformed response.
/// An entry without a `site_name` is named after its id.
pub fn battery_sites(products: Vec<Product>) -> Result<Vec<EnergySite>> {
    products
        .into_iter()
        .filter(Product::is_battery)
        .map(|product| {
            let id = product.energy_site_id.ok_or_else(|| Error::MalformedResponse {
                endpoint: "products",
                reason: "battery product without energy_site_id".into(),
            })?;
            let name = product.site_name.unwrap_or_else(|| id.to_string());
            Ok(EnergySite { id, name })
        })
        .collect()
}

/// Pick the site to act on.
///
/// Policy: the first site in API order. There is no sorting and no way to
/// choose between several installations on one account.
pub fn select_site(sites: Vec<EnergySite>) -> Result<EnergySite> {
    sites.into_iter().next().ok_or(Error::NoSiteFound)
}

/// Snapshot of a site's charge and reserve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteStatus {
    pub percentage_charged: f64,
    pub backup_reserve_percent: f64,
}

/// What the backup endpoint echoed back after an update.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReserveAck {
    pub backup_reserve_percent: Option<f64>,
}
