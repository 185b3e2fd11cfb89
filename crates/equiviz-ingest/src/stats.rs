//! Summary statistics over validated records
//!
//! Deterministic aggregation: identical input always yields bit-identical
//! output. Means are computed in f64 double precision; `None` averages occur
//! only for empty input, which the validator rules out upstream.

use crate::record::{Record, Statistics};
use std::collections::BTreeMap;

/// Compute the statistics snapshot for a record set.
pub fn compute(records: &[Record]) -> Statistics {
    let total = records.len();

    let mut equipment_distribution: BTreeMap<String, i64> = BTreeMap::new();
    for record in records {
        *equipment_distribution
            .entry(record.equipment_type.clone())
            .or_insert(0) += 1;
    }

    Statistics {
        total_equipment: total as i64,
        avg_flowrate: mean(records, |r| r.flowrate),
        avg_pressure: mean(records, |r| r.pressure),
        avg_temperature: mean(records, |r| r.temperature),
        equipment_distribution,
    }
}

fn mean(records: &[Record], field: impl Fn(&Record) -> f64) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let sum: f64 = records.iter().map(field).sum();
    Some(sum / records.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, equipment_type: &str, flowrate: f64, pressure: f64, temperature: f64) -> Record {
        Record {
            name: name.to_string(),
            equipment_type: equipment_type.to_string(),
            flowrate,
            pressure,
            temperature,
        }
    }

    #[test]
    fn test_two_row_scenario() {
        let records = vec![
            record("Pump-101", "Pump", 150.5, 25.3, 75.2),
            record("Valve-201", "Valve", 200.0, 30.5, 80.1),
        ];

        let stats = compute(&records);

        assert_eq!(stats.total_equipment, 2);
        assert_eq!(stats.avg_flowrate, Some(175.25));
        assert!((stats.avg_pressure.unwrap() - 27.9).abs() < 1e-9);
        assert!((stats.avg_temperature.unwrap() - 77.65).abs() < 1e-9);
        assert_eq!(stats.equipment_distribution.get("Pump"), Some(&1));
        assert_eq!(stats.equipment_distribution.get("Valve"), Some(&1));
        assert_eq!(stats.equipment_distribution.len(), 2);
    }

    #[test]
    fn test_mean_times_count_equals_sum() {
        let records: Vec<Record> = (1..=7)
            .map(|i| record(&format!("E-{}", i), "Pump", i as f64 * 1.5, 10.0, 20.0))
            .collect();

        let stats = compute(&records);
        let n = records.len() as f64;
        let sum: f64 = records.iter().map(|r| r.flowrate).sum();

        assert_eq!(stats.total_equipment, 7);
        assert!((stats.avg_flowrate.unwrap() * n - sum).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input_yields_null_averages() {
        let stats = compute(&[]);
        assert_eq!(stats.total_equipment, 0);
        assert_eq!(stats.avg_flowrate, None);
        assert_eq!(stats.avg_pressure, None);
        assert_eq!(stats.avg_temperature, None);
        assert!(stats.equipment_distribution.is_empty());
    }

    #[test]
    fn test_distribution_is_case_sensitive() {
        let records = vec![
            record("A", "Pump", 1.0, 1.0, 1.0),
            record("B", "pump", 1.0, 1.0, 1.0),
            record("C", "Pump", 1.0, 1.0, 1.0),
        ];

        let stats = compute(&records);
        assert_eq!(stats.equipment_distribution.get("Pump"), Some(&2));
        assert_eq!(stats.equipment_distribution.get("pump"), Some(&1));
    }

    #[test]
    fn test_compute_is_deterministic() {
        let records = vec![
            record("Pump-101", "Pump", 150.5, 25.3, 75.2),
            record("Valve-201", "Valve", 200.0, 30.5, 80.1),
            record("Reactor-301", "Reactor", 95.1, 48.2, 160.0),
        ];

        assert_eq!(compute(&records), compute(&records));
    }
}
