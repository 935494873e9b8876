//! Handler for the `status` command.

use crate::adapter::tesla::TeslaClient;
use crate::app::ReserveOrchestrator;
use crate::cli::{output, Cli};
use crate::config::Credentials;
use crate::error::Result;

/// Execute the status command. Read-only: no setting is changed.
pub async fn execute(cli: &Cli) -> Result<()> {
    let config = cli.load_config()?;
    let credentials = Credentials::from_env()?;

    let orchestrator = ReserveOrchestrator::new(TeslaClient::new(), credentials, config.reserve);
    let snapshot = orchestrator.site_snapshot().await?;

    output::section("Powerwall");
    output::key_value("Site:", &snapshot.site.name);
    output::key_value("Site ID:", &snapshot.site.id);
    output::key_value(
        "Charge:",
        format!("{:.1}%", snapshot.status.percentage_charged),
    );
    output::key_value(
        "Backup reserve:",
        format!("{:.0}%", snapshot.status.backup_reserve_percent),
    );
    println!();
    Ok(())
}
