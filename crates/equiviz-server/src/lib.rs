//! EQUIVIZ Server library
//!
//! HTTP backend for uploading chemical-equipment CSV datasets, browsing
//! their precomputed statistics, and managing per-owner retention.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod features;
pub mod middleware;
