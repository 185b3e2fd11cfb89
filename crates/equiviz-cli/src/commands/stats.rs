//! `equiviz stats` command implementation

use crate::api::ApiClient;
use crate::commands::{print_json, print_statistics};
use crate::error::Result;
use uuid::Uuid;

/// Show a dataset's statistics
pub async fn run(client: &ApiClient, id: Uuid, json: bool) -> Result<()> {
    let statistics = client.statistics(id).await?;

    if json {
        return print_json(&statistics);
    }

    print_statistics(&statistics);

    Ok(())
}
