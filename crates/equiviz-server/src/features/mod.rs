//! Feature modules implementing the EQUIVIZ API
//!
//! Each feature is a vertical slice with its own commands (writes), queries
//! (reads), and routes, following the structure:
//!
//! - `commands/` - Write operations (upload, delete)
//! - `queries/` - Read operations (list, get, statistics)
//! - `routes.rs` - HTTP route definitions
//! - `types.rs` - Shared row/response types
//!
//! Commands and queries are plain structs handled by standalone async
//! functions, keeping business logic independent of the HTTP layer.

pub mod datasets;

use axum::Router;

/// Shared state for all feature routes
#[derive(Clone)]
pub struct FeatureState {
    /// SQLite connection pool for database operations
    pub db: sqlx::SqlitePool,
}

/// Creates the main API router with all feature routes mounted
///
/// Each feature is mounted under its own path prefix:
/// - `/datasets` - CSV dataset upload, retrieval, statistics, and deletion
pub fn router(state: FeatureState) -> Router<()> {
    Router::new().nest("/datasets", datasets::datasets_routes().with_state(state.db.clone()))
}
