//! Read operations for the dataset feature

pub mod get;
pub mod list;
pub mod statistics;

pub use get::{GetDatasetError, GetDatasetQuery};
pub use list::{ListDatasetsError, ListDatasetsQuery, ListDatasetsResponse};
pub use statistics::{GetStatisticsError, GetStatisticsQuery};
