//! EQUIVIZ CLI - Main entry point

use clap::Parser;
use equiviz_cli::{api::ApiClient, commands, Cli, Commands};
use equiviz_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbose flag and environment
    let log_config = if cli.verbose {
        LogConfig::builder()
            .level(LogLevel::Debug)
            .output(LogOutput::Console)
            .log_file_prefix("equiviz-cli".to_string())
            .build()
    } else {
        LogConfig::builder()
            .level(LogLevel::Warn)
            .output(LogOutput::Console)
            .log_file_prefix("equiviz-cli".to_string())
            .build()
    };

    // Merge with environment variables (they take precedence)
    let log_config = LogConfig::from_env().unwrap_or(log_config);

    // Initialize logging (ignore errors as CLI should work without logging)
    let _ = init_logging(&log_config);

    let result = execute_command(&cli).await;

    if let Err(e) = result {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> equiviz_cli::Result<()> {
    let client = ApiClient::new(cli.server_url.clone(), cli.token.clone())?;

    match &cli.command {
        Commands::Upload { file } => commands::upload::run(&client, file, cli.json).await,
        Commands::List => commands::list::run(&client, cli.json).await,
        Commands::Get { id } => commands::get::run(&client, *id, cli.json).await,
        Commands::Stats { id } => commands::stats::run(&client, *id, cli.json).await,
        Commands::Delete { id } => commands::delete::run(&client, *id, cli.json).await,
        Commands::Health => commands::health::run(&client, cli.json).await,
    }
}
