//! EQUIVIZ CLI Library
//!
//! Command-line client for the EQUIVIZ dataset server:
//!
//! - **Upload**: Validate and upload a CSV file (`equiviz upload data.csv`)
//! - **Browse**: List stored datasets (`equiviz list`)
//! - **Inspect**: Show a dataset's records (`equiviz get <id>`)
//! - **Statistics**: Show a dataset's statistics (`equiviz stats <id>`)
//! - **Delete**: Remove a dataset (`equiviz delete <id>`)
//! - **Health**: Check server availability (`equiviz health`)

pub mod api;
pub mod commands;
pub mod error;

// Re-export commonly used types
pub use error::{CliError, Result};

use api::client::DEFAULT_SERVER_URL;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

/// EQUIVIZ - Chemical Equipment Dataset Client
#[derive(Parser, Debug)]
#[command(name = "equiviz")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print raw JSON responses instead of formatted output
    #[arg(long, global = true)]
    pub json: bool,

    /// Server URL
    #[arg(
        long,
        env = "EQUIVIZ_SERVER_URL",
        default_value = DEFAULT_SERVER_URL,
        global = true
    )]
    pub server_url: String,

    /// API token identifying the dataset owner
    #[arg(long, env = "EQUIVIZ_TOKEN", global = true)]
    pub token: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a CSV file as a new dataset
    Upload {
        /// Path to the CSV file
        file: PathBuf,
    },

    /// List stored datasets, newest first
    List,

    /// Show a dataset's records and statistics
    Get {
        /// Dataset id
        id: Uuid,
    },

    /// Show a dataset's statistics
    Stats {
        /// Dataset id
        id: Uuid,
    },

    /// Delete a dataset
    Delete {
        /// Dataset id
        id: Uuid,
    },

    /// Check server health
    Health,
}
