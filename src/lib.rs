// Export modules for library usage
pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod database;
pub mod errors;
pub mod io;
pub mod pipeline;
pub mod report;
pub mod runner;

// Re-export commonly used types
pub use crate::analyzer::ResultFormat;
pub use crate::config::ScanSettings;
pub use crate::core::{Finding, ScanRequest, ScanResult, Severity, SeverityHistogram, Stage};
pub use crate::errors::ScanError;
pub use crate::pipeline::{Pipeline, PipelineFailure, PipelineState, ScanOutcome};
pub use crate::report::{parse_findings, summarize};
