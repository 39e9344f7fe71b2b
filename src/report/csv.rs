//! Tabular (CSV) result parsing.
//!
//! Expects a header row containing at least `Name`, `Severity` and
//! `Message` columns, matched case-insensitively. Extra columns are
//! ignored.

use crate::core::{Finding, Severity};
use crate::errors::{Result, ScanError};
use std::io::Read;
use std::path::Path;

pub fn parse_file(path: &Path) -> Result<Vec<Finding>> {
    let file = std::fs::File::open(path)?;
    parse_reader(file).map_err(|e| match e {
        ScanError::Parse { message, .. } => ScanError::parse_with_path(message, path),
        other => other,
    })
}

pub fn parse_reader<R: Read>(reader: R) -> Result<Vec<Finding>> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| ScanError::parse(format!("invalid CSV: {e}")))?
        .clone();
    let name_idx = column_index(&headers, "name")?;
    let severity_idx = column_index(&headers, "severity")?;
    let message_idx = column_index(&headers, "message")?;

    let mut findings = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ScanError::parse(format!("invalid CSV row: {e}")))?;
        let field = |idx: usize| record.get(idx).unwrap_or_default().to_string();
        findings.push(Finding {
            name: field(name_idx),
            severity: Severity::parse(record.get(severity_idx).unwrap_or_default()),
            message: field(message_idx),
        });
    }
    Ok(findings)
}

fn column_index(headers: &csv::StringRecord, wanted: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| ScanError::parse(format!("missing required column \"{wanted}\"")))
}
