//! `equiviz delete` command implementation

use crate::api::ApiClient;
use crate::commands::print_json;
use crate::error::Result;
use colored::Colorize;
use uuid::Uuid;

/// Delete a dataset
pub async fn run(client: &ApiClient, id: Uuid, json: bool) -> Result<()> {
    let response = client.delete(id).await?;

    if json {
        return print_json(&response);
    }

    println!("{} dataset {}", "Deleted".green().bold(), response.id);

    Ok(())
}
