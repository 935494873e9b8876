//! Powerwall Reserve - scheduled backup-reserve updates for Tesla energy sites.
//!
//! One invocation runs a fixed, strictly sequential call chain against the
//! Tesla owner API:
//!
//! 1. validate the requested reserve percentage
//! 2. exchange the refresh token for a bearer access token
//! 3. list the account's products and pick the battery site
//! 4. read the site's current charge and reserve
//! 5. set the new backup reserve and check the echoed value
//!
//! Nothing is cached or retried between invocations. A failure at any step
//! aborts the run and is returned to the caller.
//!
//! # Modules
//!
//! - [`config`] - TOML settings, logging setup, environment credentials
//! - [`domain`] - Request, site, status and outcome types; site selection policy
//! - [`port`] - The [`EnergyApi`](port::EnergyApi) trait
//! - [`adapter`] - Tesla owner API client (reqwest)
//! - [`app`] - [`ReserveOrchestrator`](app::ReserveOrchestrator)
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use powerwall_reserve::adapter::tesla::TeslaClient;
//! use powerwall_reserve::app::ReserveOrchestrator;
//! use powerwall_reserve::config::{Credentials, ReserveConfig};
//! use powerwall_reserve::domain::InvocationRequest;
//!
//! # async fn run() -> powerwall_reserve::error::Result<()> {
//! let credentials = Credentials::from_env()?;
//! let orchestrator =
//!     ReserveOrchestrator::new(TeslaClient::new(), credentials, ReserveConfig::default());
//! let outcome = orchestrator
//!     .update_backup_reserve(&InvocationRequest::with_percent(20))
//!     .await?;
//! println!("{}", outcome.message);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
