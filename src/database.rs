//! Analysis database creation.
//!
//! Wraps the runner to build the analyzer's indexed representation of a
//! source tree using no-build extraction. A stale database at the target
//! path is always removed first so old results cannot leak across runs.

use crate::errors::{Result, ScanError};
use crate::runner;
use std::fs;
use std::path::Path;

/// Create (or recreate) an analysis database at `db_path` for `source_root`.
///
/// The source root must exist before the analyzer is invoked; a non-zero
/// exit from the tool is fatal to database creation.
pub fn create_database(
    analyzer_bin: &str,
    db_path: &Path,
    source_root: &Path,
    language: &str,
) -> Result<()> {
    if !source_root.exists() {
        return Err(ScanError::path_not_found(source_root));
    }
    let source_root = source_root.canonicalize()?;

    if db_path.exists() {
        log::info!("removing stale database at {}", db_path.display());
        fs::remove_dir_all(db_path)?;
    }

    let exit_code = runner::run(
        analyzer_bin,
        [
            "database".to_string(),
            "create".to_string(),
            db_path.display().to_string(),
            format!("--language={language}"),
            format!("--source-root={}", source_root.display()),
            "--build-mode=none".to_string(),
            "--overwrite".to_string(),
        ],
    )?;

    if exit_code != 0 {
        return Err(ScanError::DatabaseCreation { exit_code });
    }
    Ok(())
}
