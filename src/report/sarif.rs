//! SARIF result parsing.
//!
//! Only the shape codescan needs is read: top-level `runs`, each with an
//! ordered `results` array. Severity may live either in
//! `properties.severity` or in the top-level `level`; the custom property
//! wins when both are present.

use crate::core::{Finding, Severity};
use crate::errors::{Result, ScanError};
use serde_json::Value;
use std::path::Path;

pub fn parse_file(path: &Path) -> Result<Vec<Finding>> {
    let content = std::fs::read_to_string(path)?;
    parse_str(&content).map_err(|e| match e {
        ScanError::Parse { message, .. } => ScanError::parse_with_path(message, path),
        other => other,
    })
}

pub fn parse_str(content: &str) -> Result<Vec<Finding>> {
    let document: Value = serde_json::from_str(content)
        .map_err(|e| ScanError::parse(format!("invalid JSON: {e}")))?;

    let runs = document
        .get("runs")
        .and_then(Value::as_array)
        .ok_or_else(|| ScanError::parse("missing top-level \"runs\" array"))?;

    let mut findings = Vec::new();
    for run in runs {
        let results = match run.get("results").and_then(Value::as_array) {
            Some(results) => results,
            // A run with no results array contributes nothing.
            None => continue,
        };
        for result in results {
            findings.push(parse_result(result));
        }
    }
    Ok(findings)
}

fn parse_result(result: &Value) -> Finding {
    let name = result
        .get("ruleId")
        .or_else(|| result.get("name"))
        .and_then(Value::as_str)
        .unwrap_or("<unnamed>")
        .to_string();

    // message is either {"text": ...} (SARIF proper) or a bare string.
    let message = result
        .get("message")
        .map(|m| {
            m.get("text")
                .and_then(Value::as_str)
                .or_else(|| m.as_str())
                .unwrap_or_default()
                .to_string()
        })
        .unwrap_or_default();

    Finding {
        name,
        severity: resolve_severity(result),
        message,
    }
}

/// `properties.severity` takes precedence over the top-level `level`.
fn resolve_severity(result: &Value) -> Severity {
    let property = result
        .get("properties")
        .and_then(|p| p.get("severity"))
        .and_then(Value::as_str);
    let level = result.get("level").and_then(Value::as_str);

    match property.or(level) {
        Some(text) => Severity::parse(text),
        None => Severity::Unknown,
    }
}
