//! EQUIVIZ Common Library
//!
//! Shared types, utilities, and error handling for the EQUIVIZ workspace.
//!
//! # Overview
//!
//! This crate provides common functionality used across all workspace members:
//!
//! - **Error Handling**: Custom error types and result types
//! - **Checksums**: Upload integrity fingerprints (SHA-256)
//! - **Logging**: Centralized tracing initialization
//!
//! # Example
//!
//! ```no_run
//! use equiviz_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     init_logging(&config)?;
//!     tracing::info!("Application started");
//!     Ok(())
//! }
//! ```

pub mod checksum;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{EquivizError, Result};
