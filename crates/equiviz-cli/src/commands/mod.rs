//! CLI command implementations

pub mod delete;
pub mod get;
pub mod health;
pub mod list;
pub mod stats;
pub mod upload;

use colored::Colorize;
use equiviz_ingest::Statistics;

/// Render a statistics block with aligned labels.
///
/// `None` averages print as `n/a`; they only occur for datasets stored
/// before any rows existed, which the validator normally rules out.
pub(crate) fn print_statistics(statistics: &Statistics) {
    println!("  {}", "Statistics:".cyan().bold());
    println!("    Total equipment:  {}", statistics.total_equipment);
    println!("    Avg flowrate:     {}", format_avg(statistics.avg_flowrate));
    println!("    Avg pressure:     {}", format_avg(statistics.avg_pressure));
    println!("    Avg temperature:  {}", format_avg(statistics.avg_temperature));

    if !statistics.equipment_distribution.is_empty() {
        println!("    Distribution:");
        for (equipment_type, count) in &statistics.equipment_distribution {
            println!("      {:<16} {}", equipment_type, count);
        }
    }
}

fn format_avg(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "n/a".to_string(),
    }
}

/// Print a value as pretty JSON for `--json` mode.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> crate::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
