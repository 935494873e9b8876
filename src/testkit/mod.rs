//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`api`] — [`ScriptedEnergyApi`](api::ScriptedEnergyApi), an in-memory
//!   [`EnergyApi`](crate::port::EnergyApi) with scripted results and a call log.
//! - [`domain`] — Builders for products, statuses and credentials.

pub mod api;
pub mod domain;
