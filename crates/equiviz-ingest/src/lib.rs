//! EQUIVIZ Ingest Library
//!
//! The pure ingestion core: CSV structural validation and summary-statistics
//! computation for chemical-equipment readings.
//!
//! # Overview
//!
//! - **Validator**: turns raw upload bytes into an ordered set of
//!   [`Record`]s, or reports the first structural error. All-or-nothing:
//!   one bad row rejects the whole upload.
//! - **Statistics**: aggregates validated records into a read-only
//!   [`Statistics`] snapshot (counts, means, type distribution).
//!
//! Both stages are pure and deterministic; no I/O, no clock, no database.
//! Persistence and the HTTP boundary live in `equiviz-server`.
//!
//! # Example
//!
//! ```
//! use equiviz_ingest::{stats, validator};
//!
//! let csv = "Equipment_Name,Type,Flowrate,Pressure,Temperature\n\
//!            Pump-101,Pump,150.5,25.3,75.2\n";
//! let records = validator::validate("plant.csv", csv.as_bytes()).unwrap();
//! let statistics = stats::compute(&records);
//! assert_eq!(statistics.total_equipment, 1);
//! ```

pub mod error;
pub mod record;
pub mod stats;
pub mod validator;

pub use error::CsvError;
pub use record::{Record, Statistics};
