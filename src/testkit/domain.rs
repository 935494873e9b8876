//! Builders for domain primitives used across tests.

use crate::config::Credentials;
use crate::domain::{Product, SiteId, SiteStatus, BATTERY_RESOURCE_TYPE};

/// Credentials with placeholder values.
pub fn credentials() -> Credentials {
    Credentials::new(
        Some("test-refresh-token".into()),
        Some("ownerapi".into()),
        Some("test-client-secret".into()),
    )
    .unwrap_or_else(|e| panic!("test credentials are complete: {e}"))
}

/// A battery product with the given site id and name.
pub fn battery(id: &str, name: &str) -> Product {
    Product {
        resource_type: Some(BATTERY_RESOURCE_TYPE.into()),
        energy_site_id: Some(SiteId::new(id)),
        site_name: Some(name.into()),
    }
}

/// A vehicle entry: no `resource_type`, no site id.
pub fn vehicle() -> Product {
    Product::default()
}

/// A solar-only site.
pub fn solar(id: &str, name: &str) -> Product {
    Product {
        resource_type: Some("solar".into()),
        energy_site_id: Some(SiteId::new(id)),
        site_name: Some(name.into()),
    }
}

pub fn status(charge: f64, reserve: f64) -> SiteStatus {
    SiteStatus {
        percentage_charged: charge,
        backup_reserve_percent: reserve,
    }
}
