//! Application layer: the reserve update workflow.

mod orchestrator;

pub use orchestrator::{ReserveOrchestrator, SiteSnapshot};
