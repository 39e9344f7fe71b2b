//! Human-readable rendering of scan outcomes.

use crate::core::{Finding, Severity, SeverityHistogram};
use crate::pipeline::ScanOutcome;
use colored::*;
use comfy_table::Table;

/// How many individual findings to echo under the count table.
const TOP_FINDINGS: usize = 5;

fn severity_label(severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => severity.as_str().red().bold(),
        Severity::Warning => severity.as_str().yellow(),
        Severity::Note => severity.as_str().blue(),
        Severity::Unknown => severity.as_str().normal(),
    }
}

/// Severity count table in first-seen order.
pub fn render_histogram(histogram: &SeverityHistogram) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Severity", "Count"]);
    for (severity, count) in histogram.iter() {
        table.add_row(vec![severity.to_string(), count.to_string()]);
    }
    table.to_string()
}

fn render_finding(finding: &Finding) -> String {
    format!(
        "  [{}] {}: {}",
        severity_label(finding.severity),
        finding.name.bold(),
        finding.message
    )
}

/// Print the post-scan summary: result location, counts, and a short
/// listing of the first findings.
pub fn print_scan_summary(outcome: &ScanOutcome) {
    println!(
        "{} results written to {}",
        "Scan complete:".green().bold(),
        outcome.result.output_file.display()
    );

    match &outcome.histogram {
        Some(histogram) if histogram.is_empty() => {
            println!("{}", "No issues found.".green());
        }
        Some(histogram) => {
            println!(
                "{} finding(s) across {} severity level(s):",
                histogram.total(),
                histogram.iter().count()
            );
            println!("{}", render_histogram(histogram));
            for finding in outcome.result.findings.iter().take(TOP_FINDINGS) {
                println!("{}", render_finding(finding));
            }
            let remaining = outcome.result.findings.len().saturating_sub(TOP_FINDINGS);
            if remaining > 0 {
                println!("  ... and {remaining} more");
            }
        }
        None => {
            let notice = outcome
                .summary_error
                .as_ref()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no summary available".to_string());
            println!("{} {notice}", "Could not summarize results:".yellow());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Finding;

    fn histogram_of(severities: &[Severity]) -> SeverityHistogram {
        let findings: Vec<Finding> = severities
            .iter()
            .map(|&severity| Finding {
                name: "rule".to_string(),
                severity,
                message: "msg".to_string(),
            })
            .collect();
        SeverityHistogram::from_findings(&findings)
    }

    #[test]
    fn test_render_histogram_contains_counts() {
        let table = render_histogram(&histogram_of(&[
            Severity::Error,
            Severity::Error,
            Severity::Warning,
        ]));
        assert!(table.contains("error"));
        assert!(table.contains('2'));
        assert!(table.contains("warning"));
    }

    #[test]
    fn test_render_finding_includes_name_and_message() {
        colored::control::set_override(false);
        let line = render_finding(&Finding {
            name: "cpp/uninitialized-local".to_string(),
            severity: Severity::Warning,
            message: "variable used before assignment".to_string(),
        });
        assert!(line.contains("cpp/uninitialized-local"));
        assert!(line.contains("variable used before assignment"));
    }
}
