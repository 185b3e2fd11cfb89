//! `equiviz get` command implementation

use crate::api::ApiClient;
use crate::commands::{print_json, print_statistics};
use crate::error::Result;
use colored::Colorize;
use uuid::Uuid;

/// Show a dataset's records and statistics
pub async fn run(client: &ApiClient, id: Uuid, json: bool) -> Result<()> {
    let dataset = client.get(id).await?;

    if json {
        return print_json(&dataset);
    }

    println!("{}", dataset.name.green().bold());
    println!("  Id:       {}", dataset.id);
    println!("  Uploaded: {}", dataset.uploaded_at);
    println!("  Checksum: {}", dataset.checksum);
    println!();

    println!(
        "  {:<20} {:<12} {:>10} {:>10} {:>12}",
        "Equipment_Name".bold(),
        "Type".bold(),
        "Flowrate".bold(),
        "Pressure".bold(),
        "Temperature".bold()
    );
    for record in &dataset.records {
        println!(
            "  {:<20} {:<12} {:>10.2} {:>10.2} {:>12.2}",
            record.name, record.equipment_type, record.flowrate, record.pressure,
            record.temperature
        );
    }
    println!();

    print_statistics(&dataset.statistics);

    Ok(())
}
