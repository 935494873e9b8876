//! Handler for the `set` command.

use tracing::{error, info};

use crate::adapter::tesla::TeslaClient;
use crate::app::ReserveOrchestrator;
use crate::cli::{Cli, SetArgs};
use crate::config::Credentials;
use crate::domain::InvocationRequest;
use crate::error::Result;

impl SetArgs {
    /// Build the invocation payload from whichever input was given.
    pub fn invocation(&self) -> Result<InvocationRequest> {
        if let Some(ref payload) = self.event {
            return InvocationRequest::from_json(payload);
        }
        if let Some(ref path) = self.event_file {
            let payload = std::fs::read_to_string(path)?;
            return InvocationRequest::from_json(&payload);
        }
        Ok(self
            .percent
            .map_or_else(InvocationRequest::empty, InvocationRequest::with_percent))
    }
}

/// Execute the set command.
///
/// Input is validated before credentials are loaded, and credentials before
/// any request leaves the process.
pub async fn execute(cli: &Cli, args: &SetArgs) -> Result<()> {
    let config = cli.load_config()?;

    let request = args.invocation()?;
    info!(event = ?request, "Event received");
    request
        .validate()
        .inspect_err(|e| error!(error = %e, "Rejected invocation"))?;

    let credentials =
        Credentials::from_env().inspect_err(|e| error!(error = %e, "Missing Tesla credentials"))?;

    let orchestrator = ReserveOrchestrator::new(TeslaClient::new(), credentials, config.reserve);
    let outcome = orchestrator.update_backup_reserve(&request).await?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
