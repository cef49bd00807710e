//! JSON output formatter.
//!
//! Produces a pretty-printed JSON document containing the scanned root, a
//! count summary, and the full per-skill reports with their findings.

use crate::finding::{RunReport, SkillReport};
use std::path::Path;

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    root: &'a Path,
    generated_at: &'a str,
    passed: bool,
    summary: Summary,
    skills: &'a [SkillReport],
}

#[derive(serde::Serialize)]
struct Summary {
    total: usize,
    passed: usize,
    failed: usize,
    warnings: usize,
}

/// Formats a [`RunReport`] as pretty-printed JSON.
///
/// The output includes the scanned root, a summary object, and one entry
/// per skill with its verdict and findings in evaluation order.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format(report: &RunReport) -> String {
    let output = JsonOutput {
        root: &report.root,
        generated_at: &report.generated_at,
        passed: report.all_passed(),
        summary: Summary {
            total: report.total(),
            passed: report.passed(),
            failed: report.failed(),
            warnings: report.warnings(),
        },
        skills: &report.skills,
    };

    serde_json::to_string_pretty(&output).expect("JSON serialization failed")
}
