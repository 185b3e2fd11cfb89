//! Dataset feature slice
//!
//! Upload validated CSV datasets, browse their precomputed statistics, and
//! delete them. Every operation is scoped to the requesting owner; at most
//! [`MAX_DATASETS_PER_OWNER`] datasets are retained per owner, with the
//! oldest evicted on overflow.

pub mod commands;
pub mod queries;
pub mod routes;
pub mod types;

pub use routes::datasets_routes;

/// Retention cap: how many datasets each owner may hold at once
pub const MAX_DATASETS_PER_OWNER: i64 = 5;
