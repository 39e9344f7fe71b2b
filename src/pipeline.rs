//! Sequential scan pipeline: build database, analyze, summarize.
//!
//! Stages run synchronously and short-circuit on first failure. The one
//! exception is summarization: the scan has already succeeded by then, so a
//! result file that cannot be parsed downgrades to a warning instead of
//! failing the run. An already-created database is never rolled back on
//! failure; it is left in place for inspection.

use crate::analyzer;
use crate::config::ScanSettings;
use crate::core::{ScanRequest, ScanResult, SeverityHistogram, Stage};
use crate::database;
use crate::errors::ScanError;
use crate::io;
use crate::report;
use chrono::Local;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Observable pipeline state, advanced as stages run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    BuildingDatabase,
    Analyzing,
    Summarizing,
    Done,
    Failed { stage: Stage, cause: String },
}

/// A fatal stage failure, carrying which stage broke and why.
///
/// The cause is part of the Display message rather than a source link so
/// callers printing the error chain do not see it twice.
#[derive(Debug, Error)]
#[error("scan failed while {stage}: {cause}")]
pub struct PipelineFailure {
    pub stage: Stage,
    pub cause: ScanError,
}

/// What a completed pipeline hands back to the caller.
#[derive(Debug)]
pub struct ScanOutcome {
    pub result: ScanResult,
    /// Present when the result file parsed cleanly.
    pub histogram: Option<SeverityHistogram>,
    /// The non-fatal summarization error, when there was one.
    pub summary_error: Option<ScanError>,
}

pub struct Pipeline<'a> {
    settings: &'a ScanSettings,
    state: PipelineState,
}

impl<'a> Pipeline<'a> {
    pub fn new(settings: &'a ScanSettings) -> Self {
        Self {
            settings,
            state: PipelineState::Idle,
        }
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    /// Run all stages for `request`.
    ///
    /// Returns the outcome on pipeline success (including the
    /// could-not-summarize case), or the first fatal stage failure.
    pub fn run(&mut self, request: ScanRequest) -> Result<ScanOutcome, PipelineFailure> {
        let database_path = request.output_dir.join(&request.database_name);
        let output_file = derive_output_path(&request.output_dir, request.format);

        self.enter(PipelineState::BuildingDatabase);
        self.build_database(&request, &database_path)
            .map_err(|cause| self.fail(Stage::BuildingDatabase, cause))?;

        self.enter(PipelineState::Analyzing);
        analyzer::analyze(
            &self.settings.analyzer,
            &database_path,
            &request.suite,
            request.format,
            &output_file,
            self.settings.threads,
        )
        .map_err(|cause| self.fail(Stage::Analyzing, cause))?;

        self.enter(PipelineState::Summarizing);
        let (findings, histogram, summary_error) =
            match report::parse_findings(&output_file, request.format) {
                Ok(findings) => {
                    let histogram = SeverityHistogram::from_findings(&findings);
                    (findings, Some(histogram), None)
                }
                Err(e) => {
                    log::warn!("scan succeeded but results could not be summarized: {e}");
                    (Vec::new(), None, Some(e))
                }
            };

        self.enter(PipelineState::Done);
        Ok(ScanOutcome {
            result: ScanResult {
                database_path,
                output_file,
                findings,
            },
            histogram,
            summary_error,
        })
    }

    fn build_database(
        &self,
        request: &ScanRequest,
        database_path: &Path,
    ) -> Result<(), ScanError> {
        io::ensure_dir(&request.output_dir)?;
        database::create_database(
            &self.settings.analyzer,
            database_path,
            &request.source_root,
            &self.settings.language,
        )
    }

    fn enter(&mut self, state: PipelineState) {
        log::debug!("pipeline: {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    fn fail(&mut self, stage: Stage, cause: ScanError) -> PipelineFailure {
        self.state = PipelineState::Failed {
            stage,
            cause: cause.to_string(),
        };
        PipelineFailure { stage, cause }
    }
}

/// Result files are named by wall-clock timestamp. Collisions inside the
/// same second across runs are accepted, not handled.
fn derive_output_path(output_dir: &Path, format: analyzer::ResultFormat) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d-%H%M%S");
    output_dir.join(format!("scan-results-{timestamp}.{}", format.extension()))
}
