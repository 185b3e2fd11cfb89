//! `equiviz upload` command implementation
//!
//! Pre-checks the file locally (extension and size cap) so obviously bad
//! uploads fail before any bytes leave the machine, then sends it to the
//! server for full validation and storage. The checksum echoed back by the
//! server is verified against the local bytes before the result is reported.

use crate::api::ApiClient;
use crate::commands::{print_json, print_statistics};
use crate::error::{CliError, Result};
use colored::Colorize;
use equiviz_common::checksum::verify_checksum;
use equiviz_ingest::validator;
use std::path::Path;

/// Upload a CSV file as a new dataset
pub async fn run(client: &ApiClient, file: &Path, json: bool) -> Result<()> {
    let filename = file
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CliError::FileNotFound(file.display().to_string()))?
        .to_string();

    let content = tokio::fs::read(file)
        .await
        .map_err(|_| CliError::FileNotFound(file.display().to_string()))?;

    validator::precheck(&filename, content.len())
        .map_err(|e| CliError::InvalidUpload(e.to_string()))?;

    tracing::debug!(file = %file.display(), size = content.len(), "Uploading dataset");

    let response = client.upload(&filename, content.clone()).await?;

    verify_checksum(&content, &response.checksum)
        .map_err(|e| CliError::api(format!("server stored a different file: {}", e)))?;

    if json {
        return print_json(&response);
    }

    println!("{} {}", "Uploaded".green().bold(), response.name);
    println!("  Id:       {}", response.id);
    println!("  Records:  {}", response.record_count);
    println!("  Checksum: {}", &response.checksum[..16.min(response.checksum.len())]);
    print_statistics(&response.statistics);

    if !response.evicted.is_empty() {
        println!();
        println!(
            "{} {} oldest dataset(s) evicted to stay within the retention limit",
            "Note:".yellow().bold(),
            response.evicted.len()
        );
    }

    Ok(())
}
