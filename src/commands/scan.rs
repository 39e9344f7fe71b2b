use crate::analyzer::ResultFormat;
use crate::config::ScanSettings;
use crate::core::ScanRequest;
use crate::io::output;
use crate::pipeline::Pipeline;
use anyhow::Result;
use std::path::PathBuf;

/// Scan options as parsed from the command line. `None` fields fall back
/// to the loaded configuration.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub path: PathBuf,
    pub output_dir: PathBuf,
    pub format: ResultFormat,
    pub database_name: Option<String>,
    pub suite: Option<PathBuf>,
    pub threads: Option<u32>,
    pub config: Option<PathBuf>,
}

/// Fold CLI options into the loaded settings and produce the request the
/// pipeline will run. Flags win over config-file values.
fn build_request(options: ScanOptions, settings: &mut ScanSettings) -> ScanRequest {
    if let Some(threads) = options.threads {
        settings.threads = threads;
    }
    ScanRequest {
        source_root: options.path,
        output_dir: options.output_dir,
        database_name: options
            .database_name
            .unwrap_or_else(|| settings.database_name.clone()),
        format: options.format,
        suite: options.suite.unwrap_or_else(|| settings.suite.clone()),
    }
}

pub fn handle_scan(options: ScanOptions) -> Result<()> {
    let mut settings = ScanSettings::load(options.config.as_deref())?;
    let request = build_request(options, &mut settings);

    let mut pipeline = Pipeline::new(&settings);
    let outcome = pipeline.run(request)?;
    output::print_scan_summary(&outcome);
    Ok(())
}
