//! Configuration loading for codescan.
//!
//! Settings live in `.codescan.toml` next to wherever the tool is invoked;
//! every field has a default so the file is optional. CLI flags override
//! file values at the command layer, and no process-wide state is mutated.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".codescan.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScanSettings {
    /// Name or path of the external analyzer executable.
    pub analyzer: String,
    /// Extractor language passed to database creation.
    pub language: String,
    /// Query suite run when none is given on the command line.
    pub suite: PathBuf,
    /// Thread count forwarded to the analyzer; 0 lets the tool decide.
    pub threads: u32,
    /// Database directory name used when none is given on the command line.
    pub database_name: String,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            analyzer: "codeql".to_string(),
            language: "cpp".to_string(),
            suite: PathBuf::from("cpp-security-and-quality.qls"),
            threads: 0,
            database_name: "scan-db".to_string(),
        }
    }
}

impl ScanSettings {
    /// Load settings from `path` if it exists, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }
}

/// Default config file content written by `codescan init`.
pub fn default_config_content() -> &'static str {
    r#"# Codescan configuration

# External analyzer executable (name resolved via PATH, or an absolute path)
analyzer = "codeql"

# Extractor language for database creation
language = "cpp"

# Query suite to run when --suite is not given
suite = "cpp-security-and-quality.qls"

# Analyzer thread count; 0 lets the analyzer decide
threads = 0

# Database directory name inside the output directory
database_name = "scan-db"
"#
}
