//! Domain types for the backup reserve workflow.

mod outcome;
mod request;
mod site;
mod token;

pub use outcome::ReserveOutcome;
pub use request::{InvocationRequest, ReservePercent};
pub use site::{
    battery_sites, select_site, EnergySite, Product, ReserveAck, SiteId, SiteStatus,
    BATTERY_RESOURCE_TYPE,
};
pub use token::AccessToken;
