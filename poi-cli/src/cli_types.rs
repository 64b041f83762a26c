//! CLI type definitions: command enum and global flags.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "poi")]
#[command(about = "Import points of interest from CSV, JSON and XML files", long_about = None)]
pub(crate) struct Cli {
    /// Database file (overrides POI_IMPORT_DB and settings.toml)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Import PoI files (.csv, .json, .xml) into the database
    Import {
        /// Files to import, processed in order
        #[arg(required = true, num_args = 1..)]
        paths: Vec<PathBuf>,
    },

    /// List stored PoIs
    List {
        /// Only show PoIs in this category (exact match)
        #[arg(short, long)]
        category: Option<String>,

        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Search by internal id or external id
    Search {
        /// Whitespace-separated terms; every term must match
        query: String,

        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show database statistics
    Stats,
}
