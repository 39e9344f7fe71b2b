//! Typed error taxonomy for the scan pipeline.
//!
//! Fatal variants abort the pipeline at their stage; `Parse` is the one
//! warning-level condition, raised by the summarizer after the scan itself
//! has already succeeded.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// A required path does not exist. Raised before any process is
    /// launched.
    #[error("path not found: {path}")]
    PathNotFound { path: PathBuf },

    /// The analyzer executable could not be found or started.
    #[error("failed to launch {program}: {source}")]
    ProcessLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The analyzer reported failure while creating the database.
    #[error("database creation failed with exit code {exit_code}")]
    DatabaseCreation { exit_code: i32 },

    /// The analyzer reported failure while running the query suite.
    #[error("analysis failed with exit code {exit_code}")]
    Analysis { exit_code: i32 },

    /// The result file is absent, malformed, or not valid for its declared
    /// format. Non-fatal to the pipeline.
    #[error("could not parse results{}: {message}", display_path(.path))]
    Parse {
        message: String,
        path: Option<PathBuf>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" from {}", p.display()),
        None => String::new(),
    }
}

impl ScanError {
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            path: None,
        }
    }

    pub fn parse_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Parse {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Whether this error should abort the pipeline. Parse failures are
    /// reported but leave the scan itself successful.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ScanError::Parse { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
