//! Core domain types shared across the scan pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Severity of a single finding as reported by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Note,
    Unknown,
}

impl Severity {
    /// Parse an analyzer-reported severity string. Anything unrecognized
    /// maps to `Unknown` rather than failing the whole summary.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            "note" => Severity::Note,
            _ => Severity::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
            Severity::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported issue instance. Immutable after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub name: String,
    pub severity: Severity,
    pub message: String,
}

/// Per-severity finding counts in first-seen order.
///
/// Kept as an ordered pair list rather than a map so the summary prints
/// severities in the order the analyzer reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeverityHistogram {
    counts: Vec<(Severity, usize)>,
}

impl SeverityHistogram {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut histogram = Self::default();
        for finding in findings {
            histogram.record(finding.severity);
        }
        histogram
    }

    fn record(&mut self, severity: Severity) {
        match self.counts.iter_mut().find(|(s, _)| *s == severity) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((severity, 1)),
        }
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.counts
            .iter()
            .find(|(s, _)| *s == severity)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate (severity, count) pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (Severity, usize)> + '_ {
        self.counts.iter().copied()
    }
}

/// Pipeline stage identifiers, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    BuildingDatabase,
    Analyzing,
    Summarizing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::BuildingDatabase => "building database",
            Stage::Analyzing => "analyzing",
            Stage::Summarizing => "summarizing",
        };
        f.write_str(name)
    }
}

/// Everything the pipeline needs for one scan. Owned by the CLI layer and
/// passed by value into the pipeline.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub source_root: PathBuf,
    pub output_dir: PathBuf,
    pub database_name: String,
    pub format: crate::analyzer::ResultFormat,
    pub suite: PathBuf,
}

/// Artifacts of a successful scan. Created only after the analyze stage
/// completes.
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub database_path: PathBuf,
    pub output_file: PathBuf,
    pub findings: Vec<Finding>,
}
