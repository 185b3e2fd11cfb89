//! `equiviz list` command implementation

use crate::api::ApiClient;
use crate::commands::print_json;
use crate::error::Result;
use colored::Colorize;

/// List stored datasets, newest first
pub async fn run(client: &ApiClient, json: bool) -> Result<()> {
    let response = client.list().await?;

    if json {
        return print_json(&response);
    }

    if response.datasets.is_empty() {
        println!("No datasets found.");
        println!("Run 'equiviz upload <file.csv>' to upload one.");
        return Ok(());
    }

    println!("{}", "Datasets:".cyan().bold());
    println!();

    for dataset in &response.datasets {
        println!("{}", dataset.name.green());
        println!("  Id:       {}", dataset.id);
        println!("  Uploaded: {}", dataset.uploaded_at);
        println!("  Records:  {}", dataset.record_count);
        println!("  Checksum: {}", &dataset.checksum[..16.min(dataset.checksum.len())]);
        println!();
    }

    println!("Total: {}", response.total);

    Ok(())
}
