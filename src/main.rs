use clap::Parser;

use powerwall_reserve::cli::{self, output, CheckCommand, Cli, Commands};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Set(args) => cli::set::execute(&cli, args).await,
        Commands::Status => cli::status::execute(&cli).await,
        Commands::Check(CheckCommand::Config) => cli::check::execute_config(&cli.config),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
