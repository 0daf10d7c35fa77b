//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// docprobe - structural schema inference for document-store collections
#[derive(Parser, Debug)]
#[command(name = "docprobe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Scan configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Connection URI; takes precedence over host/port
    #[arg(long, global = true, env = "MONGODB_URI")]
    pub uri: Option<String>,

    /// Store hostname
    #[arg(long, global = true, env = "MONGODB_HOSTNAME")]
    pub host: Option<String>,

    /// Store port
    #[arg(long, global = true, env = "MONGODB_PORT")]
    pub port: Option<u16>,

    /// Database to scan
    #[arg(short, long, global = true, env = "DATABASE_NAME")]
    pub database: Option<String>,

    /// Output format for stdout results
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Test the connection to the document store
    Check,

    /// List collection names after filtering
    Collections,

    /// Scan collections and write the schema file
    Scan {
        /// Collections to scan (comma-separated, empty = all that pass the filter)
        #[arg(long)]
        collections: Option<String>,

        /// Maximum documents pulled per collection (0 = unlimited)
        #[arg(long)]
        sample: Option<u64>,

        /// Keep every Nth pulled document
        #[arg(long)]
        stride: Option<usize>,

        /// Output path for the schema file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the schema to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
}

/// Output format for stdout results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON (one line)
    Json,
    /// Indented JSON
    Pretty,
}
