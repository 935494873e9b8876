use serde::Serialize;

use super::request::ReservePercent;
use super::site::{EnergySite, SiteStatus};

/// Result of a successful reserve update, as handed back to the trigger.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveOutcome {
    pub message: String,
    pub site: String,
    pub previous_reserve: i64,
    pub new_reserve: u8,
    pub current_charge: f64,
}

impl ReserveOutcome {
    pub fn new(site: &EnergySite, before: &SiteStatus, target: ReservePercent) -> Self {
        Self {
            message: format!("Backup reserve set to {target}"),
            site: site.name.clone(),
            previous_reserve: before.backup_reserve_percent.round() as i64,
            new_reserve: target.value(),
            current_charge: before.percentage_charged,
        }
    }
}
