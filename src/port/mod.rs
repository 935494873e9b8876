//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! The orchestrator talks to the outside world through these traits;
//! adapters implement them for real services, the testkit for tests.

mod energy;

pub use energy::EnergyApi;
