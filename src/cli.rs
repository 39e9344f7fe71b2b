use crate::analyzer::ResultFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "codescan")]
#[command(about = "Orchestrates no-build static-analysis scans and summarizes findings", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a source tree: build an analysis database, run the query
    /// suite, and summarize findings
    Scan {
        /// Source tree to scan
        path: PathBuf,

        /// Directory for the database and result file
        #[arg(short, long, default_value = "scan-output")]
        output_dir: PathBuf,

        /// Result file format
        #[arg(short, long, value_enum, default_value = "sarif")]
        format: ResultFormat,

        /// Database directory name (defaults to the configured name)
        #[arg(long)]
        database_name: Option<String>,

        /// Query suite to run (defaults to the configured suite)
        #[arg(long)]
        suite: Option<PathBuf>,

        /// Analyzer thread count; 0 lets the analyzer decide
        #[arg(long)]
        threads: Option<u32>,

        /// Configuration file (defaults to .codescan.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Summarize an existing result file without re-running a scan
    Summarize {
        /// Result file to summarize
        file: PathBuf,

        /// Format the file was written in
        #[arg(short, long, value_enum, default_value = "sarif")]
        format: ResultFormat,
    },

    /// Initialize a configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
