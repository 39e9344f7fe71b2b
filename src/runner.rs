//! Child-process execution for the external analyzer.
//!
//! The runner only distinguishes "could not start" from "ran and exited":
//! a non-zero exit code is returned to the caller, who decides whether it
//! is fatal for its stage.

use crate::errors::{Result, ScanError};
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Resolve a program name to an executable path.
///
/// Bare names go through PATH lookup so a missing analyzer fails with a
/// launch error instead of a confusing spawn failure later.
pub fn resolve_program(program: &str) -> Result<PathBuf> {
    which::which(program).map_err(|e| ScanError::ProcessLaunch {
        program: program.to_string(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()),
    })
}

/// Run `program` with `args`, inheriting stdout/stderr, and return its exit
/// code. The analyzer's diagnostic output is opaque log content and is never
/// captured or parsed.
pub fn run<I, S>(program: &str, args: I) -> Result<i32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let executable = resolve_program(program)?;
    log::debug!("running {}", executable.display());

    let status = Command::new(&executable)
        .args(args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| ScanError::ProcessLaunch {
            program: program.to_string(),
            source: e,
        })?;

    // A killed-by-signal child has no code; report it as -1.
    Ok(status.code().unwrap_or(-1))
}
