use crate::analyzer::ResultFormat;
use crate::io::output;
use crate::report;
use anyhow::Result;
use colored::*;
use std::path::Path;

/// Summarize an already-written result file. Unlike the pipeline's
/// summarize stage, a parse failure here is the whole command failing.
pub fn handle_summarize(file: &Path, format: ResultFormat) -> Result<()> {
    let histogram = report::summarize(file, format)?;

    if histogram.is_empty() {
        println!("{}", "No issues found.".green());
    } else {
        println!("{} finding(s) in {}:", histogram.total(), file.display());
        println!("{}", output::render_histogram(&histogram));
    }
    Ok(())
}
