//! Result-file parsing and severity summarization.
//!
//! The analyzer writes result files; this module reads them back into
//! `Finding` records and aggregates a severity histogram. Files are small
//! analysis reports, so they are loaded fully into memory.

pub mod csv;
pub mod sarif;

use crate::analyzer::ResultFormat;
use crate::core::{Finding, SeverityHistogram};
use crate::errors::{Result, ScanError};
use std::path::Path;

/// Parse the result file at `path` into the ordered finding sequence.
pub fn parse_findings(path: &Path, format: ResultFormat) -> Result<Vec<Finding>> {
    if !path.exists() {
        return Err(ScanError::parse_with_path("result file is missing", path));
    }
    match format {
        ResultFormat::Sarif => sarif::parse_file(path),
        ResultFormat::Csv => csv::parse_file(path),
        ResultFormat::Graph => Err(ScanError::parse_with_path(
            "graph output has no finding records to summarize",
            path,
        )),
    }
}

/// Summarize the result file into per-severity counts.
///
/// Zero findings yields an empty histogram, not an error; callers render
/// that as a "no issues found" signal.
pub fn summarize(path: &Path, format: ResultFormat) -> Result<SeverityHistogram> {
    let findings = parse_findings(path, format)?;
    Ok(SeverityHistogram::from_findings(&findings))
}
