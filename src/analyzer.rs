//! Query-suite execution against an existing analysis database.

use crate::errors::{Result, ScanError};
use crate::runner;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Result file formats the analyzer can emit.
///
/// `Sarif` is the structured nested finding format, `Csv` the flat tabular
/// one. `Graph` output can be produced but not summarized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultFormat {
    Sarif,
    Csv,
    Graph,
}

impl ResultFormat {
    /// Value passed to the analyzer's `--format` flag.
    pub fn tool_format(&self) -> &'static str {
        match self {
            ResultFormat::Sarif => "sarif-latest",
            ResultFormat::Csv => "csv",
            ResultFormat::Graph => "graphtext",
        }
    }

    /// Canonical file extension for result files in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ResultFormat::Sarif => "sarif",
            ResultFormat::Csv => "csv",
            ResultFormat::Graph => "txt",
        }
    }
}

impl fmt::Display for ResultFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResultFormat::Sarif => "sarif",
            ResultFormat::Csv => "csv",
            ResultFormat::Graph => "graph",
        };
        f.write_str(name)
    }
}

/// Run `suite` against the database at `db_path`, writing results to
/// `output_path` in `format`.
///
/// `threads = 0` leaves the thread count to the analyzer. No retries: a
/// failed analysis is always surfaced to the caller.
pub fn analyze(
    analyzer_bin: &str,
    db_path: &Path,
    suite: &Path,
    format: ResultFormat,
    output_path: &Path,
    threads: u32,
) -> Result<()> {
    let exit_code = runner::run(
        analyzer_bin,
        [
            "database".to_string(),
            "analyze".to_string(),
            db_path.display().to_string(),
            suite.display().to_string(),
            format!("--format={}", format.tool_format()),
            format!("--output={}", output_path.display()),
            format!("--threads={threads}"),
        ],
    )?;

    if exit_code != 0 {
        return Err(ScanError::Analysis { exit_code });
    }
    Ok(())
}
