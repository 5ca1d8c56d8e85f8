//! Tunedex CLI
//!
//! Command-line tools for the Tunedex catalog.
//!
//! # Commands
//!
//! - `check` - Validate an ingestion file and report per-line outcomes
//! - `search` - Load an ingestion file into an in-memory catalog and
//!   run a free-text search over it
//! - `version` - Show version information

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Tunedex command-line catalog tools.
#[derive(Parser)]
#[command(name = "tunedex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an ingestion file and report per-line outcomes
    Check {
        /// Path to the ingestion file
        file: PathBuf,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Load an ingestion file into an in-memory catalog and search it
    Search {
        /// Path to the ingestion file
        file: PathBuf,

        /// Free-text query
        query: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Check { file, format } => {
            commands::check::run(&file, &format)?;
        }
        Commands::Search {
            file,
            query,
            format,
        } => {
            commands::search::run(&file, &query, &format)?;
        }
        Commands::Version => {
            println!("Tunedex CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Tunedex Core v{}", tunedex_core::VERSION);
        }
    }

    Ok(())
}
