//! CSV structural validation
//!
//! Turns raw upload bytes into an ordered `Vec<Record>`, or reports the
//! first structural error. The policy is all-or-nothing: the first invalid
//! row aborts the whole upload; there is no lenient/partial import.
//!
//! Validation order:
//!
//! 1. Pre-parse checks: `.csv` extension, size cap, UTF-8 decodability
//!    (rejected as [`CsvError::Format`] without touching the content)
//! 2. Header check: the five required columns, matched case- and
//!    spacing-tolerantly ("Equipment_Name" and "Equipment Name" both work)
//! 3. Per-row checks: non-empty name/type, finite decimal numerics
//! 4. Non-empty result: header-only files are an error, not an empty dataset

use crate::error::{CsvError, RowErrorReason};
use crate::record::Record;
use csv::StringRecord;

/// Maximum accepted upload size in bytes (5 MiB)
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Canonical names of the required columns, in CSV order
pub const REQUIRED_COLUMNS: [&str; 5] =
    ["Equipment_Name", "Type", "Flowrate", "Pressure", "Temperature"];

/// Validate an uploaded CSV file end to end.
///
/// Pure function over the input bytes; `filename` is only consulted for the
/// extension pre-check. Row order of the output matches CSV row order.
pub fn validate(filename: &str, bytes: &[u8]) -> Result<Vec<Record>, CsvError> {
    precheck(filename, bytes.len())?;

    let text = std::str::from_utf8(bytes)
        .map_err(|_| CsvError::Format("file does not decode as UTF-8 text".to_string()))?;

    parse_records(text)
}

/// Pre-parse checks enforced before any content is examined.
///
/// Failing either check yields [`CsvError::Format`] without attempting to
/// parse the body.
pub fn precheck(filename: &str, size: usize) -> Result<(), CsvError> {
    if !filename.to_ascii_lowercase().ends_with(".csv") {
        return Err(CsvError::Format(format!(
            "'{}' is not a .csv file",
            filename
        )));
    }

    if size > MAX_UPLOAD_BYTES {
        return Err(CsvError::Format(format!(
            "file exceeds the {} MiB upload limit",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        )));
    }

    Ok(())
}

/// Positions of the required columns within the header row
struct ColumnMap {
    name: usize,
    equipment_type: usize,
    flowrate: usize,
    pressure: usize,
    temperature: usize,
}

impl ColumnMap {
    /// Resolve required columns against a header row.
    ///
    /// Matching is tolerant of case and of spaces vs. underscores; the first
    /// occurrence wins if a column appears twice.
    fn resolve(headers: &StringRecord) -> Result<Self, CsvError> {
        let normalized: Vec<String> = headers
            .iter()
            .map(|h| h.trim().to_ascii_lowercase().replace(' ', "_"))
            .collect();

        let position = |canonical: &'static str| -> Result<usize, CsvError> {
            let wanted = canonical.to_ascii_lowercase();
            normalized
                .iter()
                .position(|h| *h == wanted)
                .ok_or(CsvError::MissingColumn { column: canonical })
        };

        Ok(Self {
            name: position("Equipment_Name")?,
            equipment_type: position("Type")?,
            flowrate: position("Flowrate")?,
            pressure: position("Pressure")?,
            temperature: position("Temperature")?,
        })
    }
}

fn parse_records(text: &str) -> Result<Vec<Record>, CsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| CsvError::Format(format!("unreadable CSV header: {}", e)))?
        .clone();

    let columns = ColumnMap::resolve(&headers)?;

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let raw = result.map_err(|e| CsvError::Format(format!("unreadable CSV row: {}", e)))?;

        records.push(Record {
            name: string_field(&raw, row, columns.name, "Equipment_Name")?,
            equipment_type: string_field(&raw, row, columns.equipment_type, "Type")?,
            flowrate: numeric_field(&raw, row, columns.flowrate, "Flowrate")?,
            pressure: numeric_field(&raw, row, columns.pressure, "Pressure")?,
            temperature: numeric_field(&raw, row, columns.temperature, "Temperature")?,
        });
    }

    if records.is_empty() {
        return Err(CsvError::Empty);
    }

    Ok(records)
}

fn string_field(
    raw: &StringRecord,
    row: usize,
    index: usize,
    column: &'static str,
) -> Result<String, CsvError> {
    match raw.get(index) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(CsvError::Row {
            row,
            column,
            reason: RowErrorReason::MissingValue,
        }),
    }
}

fn numeric_field(
    raw: &StringRecord,
    row: usize,
    index: usize,
    column: &'static str,
) -> Result<f64, CsvError> {
    let value = match raw.get(index) {
        Some(value) if !value.is_empty() => value,
        _ => {
            return Err(CsvError::Row {
                row,
                column,
                reason: RowErrorReason::MissingValue,
            })
        },
    };

    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(CsvError::Row {
            row,
            column,
            reason: RowErrorReason::NotNumeric,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Equipment_Name,Type,Flowrate,Pressure,Temperature";

    fn csv_with_rows(rows: &[&str]) -> String {
        let mut out = String::from(HEADER);
        for row in rows {
            out.push('\n');
            out.push_str(row);
        }
        out.push('\n');
        out
    }

    #[test]
    fn test_validate_two_rows() {
        let csv = csv_with_rows(&["Pump-101,Pump,150.5,25.3,75.2", "Valve-201,Valve,200.0,30.5,80.1"]);
        let records = validate("plant.csv", csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Pump-101");
        assert_eq!(records[0].flowrate, 150.5);
        assert_eq!(records[1].equipment_type, "Valve");
        assert_eq!(records[1].temperature, 80.1);
    }

    #[test]
    fn test_row_order_is_preserved() {
        let csv = csv_with_rows(&[
            "C-3,Reactor,1,1,1",
            "A-1,Pump,2,2,2",
            "B-2,Valve,3,3,3",
        ]);
        let records = validate("plant.csv", csv.as_bytes()).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["C-3", "A-1", "B-2"]);
    }

    #[test]
    fn test_header_accepts_space_variant() {
        let csv = "Equipment Name,Type,Flowrate,Pressure,Temperature\nPump-101,Pump,1,2,3\n";
        let records = validate("plant.csv", csv.as_bytes()).unwrap();
        assert_eq!(records[0].name, "Pump-101");
    }

    #[test]
    fn test_header_is_case_and_spacing_tolerant() {
        let csv = " equipment_name , TYPE ,flowrate,PRESSURE, temperature \nPump-101,Pump,1,2,3\n";
        assert!(validate("plant.csv", csv.as_bytes()).is_ok());
    }

    #[test]
    fn test_each_missing_column_is_named() {
        for missing in REQUIRED_COLUMNS {
            let header: Vec<&str> = REQUIRED_COLUMNS
                .iter()
                .copied()
                .filter(|c| *c != missing)
                .collect();
            let csv = format!("{}\na,b,1,2\n", header.join(","));

            match validate("plant.csv", csv.as_bytes()) {
                Err(CsvError::MissingColumn { column }) => assert_eq!(column, missing),
                other => panic!("expected MissingColumn for '{}', got {:?}", missing, other),
            }
        }
    }

    #[test]
    fn test_non_numeric_pressure_reports_row_and_column() {
        let csv = csv_with_rows(&[
            "Pump-101,Pump,150.5,25.3,75.2",
            "Valve-201,Valve,200.0,not-a-number,80.1",
        ]);

        match validate("plant.csv", csv.as_bytes()) {
            Err(CsvError::Row { row, column, reason }) => {
                assert_eq!(row, 2);
                assert_eq!(column, "Pressure");
                assert_eq!(reason, RowErrorReason::NotNumeric);
            },
            other => panic!("expected RowError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_field_is_a_row_error() {
        let csv = csv_with_rows(&["Pump-101,Pump,150.5"]);

        match validate("plant.csv", csv.as_bytes()) {
            Err(CsvError::Row { row, column, reason }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "Pressure");
                assert_eq!(reason, RowErrorReason::MissingValue);
            },
            other => panic!("expected RowError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let csv = csv_with_rows(&[",Pump,150.5,25.3,75.2"]);
        assert!(matches!(
            validate("plant.csv", csv.as_bytes()),
            Err(CsvError::Row { row: 1, column: "Equipment_Name", .. })
        ));
    }

    #[test]
    fn test_first_invalid_row_aborts_whole_upload() {
        let csv = csv_with_rows(&[
            "Pump-101,Pump,150.5,25.3,75.2",
            "Broken,Pump,oops,1,1",
            "Valve-201,Valve,200.0,30.5,80.1",
        ]);
        // Row 3 is fine, but the upload still fails on row 2
        assert!(matches!(
            validate("plant.csv", csv.as_bytes()),
            Err(CsvError::Row { row: 2, column: "Flowrate", .. })
        ));
    }

    #[test]
    fn test_header_only_csv_is_rejected() {
        let csv = format!("{}\n", HEADER);
        assert_eq!(validate("plant.csv", csv.as_bytes()), Err(CsvError::Empty));
    }

    #[test]
    fn test_integer_values_accepted() {
        let csv = csv_with_rows(&["Pump-101,Pump,150,25,75"]);
        let records = validate("plant.csv", csv.as_bytes()).unwrap();
        assert_eq!(records[0].flowrate, 150.0);
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let csv = csv_with_rows(&["Pump-101,Pump,inf,25,75"]);
        assert!(matches!(
            validate("plant.csv", csv.as_bytes()),
            Err(CsvError::Row { column: "Flowrate", .. })
        ));
    }

    #[test]
    fn test_wrong_extension_fails_before_parsing() {
        // Body is valid CSV; the extension check must fire first
        let csv = csv_with_rows(&["Pump-101,Pump,1,2,3"]);
        assert!(matches!(
            validate("plant.txt", csv.as_bytes()),
            Err(CsvError::Format(_))
        ));
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        let csv = csv_with_rows(&["Pump-101,Pump,1,2,3"]);
        assert!(validate("PLANT.CSV", csv.as_bytes()).is_ok());
    }

    #[test]
    fn test_oversize_file_rejected() {
        assert!(matches!(
            precheck("plant.csv", MAX_UPLOAD_BYTES + 1),
            Err(CsvError::Format(_))
        ));
        assert!(precheck("plant.csv", MAX_UPLOAD_BYTES).is_ok());
    }

    #[test]
    fn test_non_utf8_bytes_rejected() {
        let bytes = [0xff, 0xfe, 0x00, 0x41];
        assert!(matches!(
            validate("plant.csv", &bytes),
            Err(CsvError::Format(_))
        ));
    }
}
