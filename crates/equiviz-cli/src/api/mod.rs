//! HTTP API layer for the EQUIVIZ CLI

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::ApiClient;
