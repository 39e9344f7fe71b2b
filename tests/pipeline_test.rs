//! End-to-end pipeline tests against a stub analyzer script.
//!
//! The stub honors the two invocation shapes the pipeline uses
//! (`database create`, `database analyze`) so the tests exercise the real
//! runner, path derivation, and summarization without a real analyzer
//! install.

#![cfg(unix)]

use codescan::{
    Pipeline, PipelineState, ResultFormat, ScanError, ScanRequest, ScanSettings, Severity, Stage,
};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SARIF_PAYLOAD: &str = r#"{
  "version": "2.1.0",
  "runs": [
    {
      "results": [
        {"ruleId": "cpp/unbounded-write", "level": "error", "message": {"text": "strcpy without bounds"}},
        {"ruleId": "cpp/command-injection", "level": "error", "message": {"text": "tainted system() call"}},
        {"ruleId": "cpp/uninitialized-local", "level": "warning", "message": {"text": "read before assignment"}}
      ]
    }
  ]
}"#;

fn write_stub(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("analyzer-stub");
    fs::write(&path, body).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Stub that creates the database directory and writes `payload` to
/// whatever `--output=` path the analyze invocation asks for.
fn working_stub(dir: &Path, payload: &str) -> PathBuf {
    let body = format!(
        r#"#!/bin/sh
if [ "$2" = "create" ]; then
    mkdir -p "$3"
    exit 0
fi
out=""
for arg in "$@"; do
    case "$arg" in
        --output=*) out="${{arg#--output=}}" ;;
    esac
done
cat > "$out" <<'RESULTS'
{payload}
RESULTS
exit 0
"#
    );
    write_stub(dir, &body)
}

fn settings_for(stub: &Path) -> ScanSettings {
    ScanSettings {
        analyzer: stub.display().to_string(),
        ..ScanSettings::default()
    }
}

fn request_for(temp: &TempDir, format: ResultFormat) -> ScanRequest {
    let source = temp.path().join("source");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("sample.cpp"), "int main() { return 0; }\n").unwrap();
    ScanRequest {
        source_root: source,
        output_dir: temp.path().join("out"),
        database_name: "scan-db".to_string(),
        format,
        suite: PathBuf::from("cpp-security-and-quality.qls"),
    }
}

fn result_files(output_dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(output_dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().starts_with("scan-results-"))
                .unwrap_or(false)
        })
        .collect()
}

#[test]
fn test_successful_scan_produces_one_result_file_and_histogram() {
    let temp = TempDir::new().unwrap();
    let stub = working_stub(temp.path(), SARIF_PAYLOAD);
    let settings = settings_for(&stub);
    let request = request_for(&temp, ResultFormat::Sarif);
    let output_dir = request.output_dir.clone();

    let mut pipeline = Pipeline::new(&settings);
    let outcome = pipeline.run(request).unwrap();

    assert_eq!(*pipeline.state(), PipelineState::Done);
    assert!(outcome.result.output_file.exists());
    assert_eq!(result_files(&output_dir).len(), 1);

    let histogram = outcome.histogram.expect("results should have summarized");
    assert_eq!(histogram.count(Severity::Error), 2);
    assert_eq!(histogram.count(Severity::Warning), 1);
    assert_eq!(outcome.result.findings.len(), 3);
    assert!(outcome.summary_error.is_none());
}

#[test]
fn test_rebuild_removes_stale_database_first() {
    let temp = TempDir::new().unwrap();
    let stub = working_stub(temp.path(), SARIF_PAYLOAD);
    let settings = settings_for(&stub);
    let request = request_for(&temp, ResultFormat::Sarif);

    // Seed a stale database containing a sentinel the stub never writes.
    let database_path = request.output_dir.join(&request.database_name);
    fs::create_dir_all(&database_path).unwrap();
    let sentinel = database_path.join("stale-artifact");
    fs::write(&sentinel, "old").unwrap();

    let mut pipeline = Pipeline::new(&settings);
    pipeline.run(request).unwrap();

    assert!(database_path.exists());
    assert!(!sentinel.exists(), "stale artifact survived the rebuild");
}

#[test]
fn test_database_failure_short_circuits_before_analyze() {
    let temp = TempDir::new().unwrap();
    let marker = temp.path().join("analyze-was-invoked");
    let body = format!(
        r#"#!/bin/sh
if [ "$2" = "create" ]; then
    exit 3
fi
touch "{}"
exit 0
"#,
        marker.display()
    );
    let stub = write_stub(temp.path(), &body);
    let settings = settings_for(&stub);
    let request = request_for(&temp, ResultFormat::Sarif);

    let mut pipeline = Pipeline::new(&settings);
    let failure = pipeline.run(request).unwrap_err();

    assert_eq!(failure.stage, Stage::BuildingDatabase);
    match failure.cause {
        ScanError::DatabaseCreation { exit_code } => assert_eq!(exit_code, 3),
        other => panic!("expected DatabaseCreation, got {other:?}"),
    }
    assert!(
        !marker.exists(),
        "analyzer must not be invoked after database failure"
    );
    assert!(matches!(
        pipeline.state(),
        PipelineState::Failed {
            stage: Stage::BuildingDatabase,
            ..
        }
    ));
}

#[test]
fn test_corrupt_result_file_still_reports_pipeline_success() {
    let temp = TempDir::new().unwrap();
    let stub = working_stub(temp.path(), "this is not json at all");
    let settings = settings_for(&stub);
    let request = request_for(&temp, ResultFormat::Sarif);

    let mut pipeline = Pipeline::new(&settings);
    let outcome = pipeline.run(request).unwrap();

    assert_eq!(*pipeline.state(), PipelineState::Done);
    assert!(outcome.histogram.is_none());
    let summary_error = outcome.summary_error.expect("parse failure expected");
    assert!(matches!(summary_error, ScanError::Parse { .. }));
    assert!(outcome.result.findings.is_empty());
}

#[test]
fn test_csv_scan_summarizes_tabular_results() {
    let temp = TempDir::new().unwrap();
    let stub = working_stub(
        temp.path(),
        "Name,Severity,Message\nA,error,first\nB,warning,second\nC,error,third",
    );
    let settings = settings_for(&stub);
    let request = request_for(&temp, ResultFormat::Csv);

    let mut pipeline = Pipeline::new(&settings);
    let outcome = pipeline.run(request).unwrap();

    assert!(outcome
        .result
        .output_file
        .to_string_lossy()
        .ends_with(".csv"));
    let histogram = outcome.histogram.unwrap();
    assert_eq!(histogram.count(Severity::Error), 2);
    assert_eq!(histogram.count(Severity::Warning), 1);
}

#[test]
fn test_analyze_failure_reports_analyzing_stage() {
    let temp = TempDir::new().unwrap();
    let body = r#"#!/bin/sh
if [ "$2" = "create" ]; then
    mkdir -p "$3"
    exit 0
fi
exit 32
"#;
    let stub = write_stub(temp.path(), body);
    let settings = settings_for(&stub);
    let request = request_for(&temp, ResultFormat::Sarif);
    let database_path = request.output_dir.join(&request.database_name);

    let mut pipeline = Pipeline::new(&settings);
    let failure = pipeline.run(request).unwrap_err();

    assert_eq!(failure.stage, Stage::Analyzing);
    match failure.cause {
        ScanError::Analysis { exit_code } => assert_eq!(exit_code, 32),
        other => panic!("expected Analysis, got {other:?}"),
    }
    // No rollback: the database stays for inspection.
    assert!(database_path.exists());
}
