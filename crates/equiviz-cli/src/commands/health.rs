//! `equiviz health` command implementation

use crate::api::ApiClient;
use crate::error::{CliError, Result};
use colored::Colorize;

/// Check server health
pub async fn run(client: &ApiClient, json: bool) -> Result<()> {
    let healthy = client.health_check().await?;

    if json {
        println!("{}", serde_json::json!({ "healthy": healthy }));
    } else if healthy {
        println!("{} server is reachable and healthy", "OK".green().bold());
    } else {
        println!("{} server is not reachable", "FAIL".red().bold());
    }

    if healthy {
        Ok(())
    } else {
        Err(CliError::api("health check failed"))
    }
}
