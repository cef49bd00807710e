//! Human-readable colored text formatter.
//!
//! Produces a terminal-friendly report with ANSI color codes: one banner
//! section per skill listing every finding in evaluation order, followed by
//! aggregate counts, a per-skill verdict listing, and a final overall
//! banner.

use crate::finding::{RunReport, Severity, SkillReport};
use colored::Colorize;

const HEAVY_RULE: &str =
    "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const DOUBLE_RULE: &str =
    "============================================================";

/// Formats a [`RunReport`] as human-readable, ANSI-colored text.
///
/// Sections rendered (in order):
/// 1. **Header**: report banner and the skills root.
/// 2. **Per-skill sections**: every finding with its severity marker,
///    then a PASSED/FAILED verdict banner.
/// 3. **Summary**: total/passed/failed/warning counts.
/// 4. **Detailed results**: one verdict line per skill, in run order
///    (omitted when no skills were found).
/// 5. **Overall banner**: all passed vs. some failed.
pub fn format(report: &RunReport) -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!("{DOUBLE_RULE}\n"));
    out.push_str(&format!("{}\n", "SKILLS VALIDATION REPORT".bold()));
    out.push_str(&format!("{DOUBLE_RULE}\n"));
    out.push_str(&format!(
        "{}\n\n",
        format!("Root: {}", report.root.display()).dimmed()
    ));

    for skill in &report.skills {
        format_skill(&mut out, skill);
    }

    // Summary
    out.push_str(&format!("{DOUBLE_RULE}\n"));
    out.push_str(&format!("{}\n", "VALIDATION SUMMARY".bold()));
    out.push_str(&format!("{DOUBLE_RULE}\n\n"));
    out.push_str(&format!("Total skills tested: {}\n", report.total()));
    out.push_str(&format!(
        "{}\n",
        format!("Passed: {}", report.passed()).green()
    ));
    out.push_str(&format!(
        "{}\n",
        format!("Failed: {}", report.failed()).red()
    ));
    out.push_str(&format!(
        "{}\n\n",
        format!("Warnings: {}", report.warnings()).yellow()
    ));

    // Detailed per-skill verdicts, in the same order the skills were run.
    if !report.skills.is_empty() {
        out.push_str(&format!("{}\n", "Detailed results:".bold()));
        for skill in &report.skills {
            let status = if skill.passed {
                "✓ PASS".green().to_string()
            } else {
                "✗ FAIL".red().to_string()
            };
            out.push_str(&format!("  {status} - {}\n", skill.skill));
        }
        out.push('\n');
    }

    if report.all_passed() {
        out.push_str(&format!(
            "{}\n",
            "✓ ALL SKILLS PASSED VALIDATION".green().bold()
        ));
    } else {
        out.push_str(&format!(
            "{}\n",
            "✗ SOME SKILLS FAILED VALIDATION".red().bold()
        ));
    }

    out
}

/// Renders one skill's section: banner, findings in order, verdict.
fn format_skill(out: &mut String, skill: &SkillReport) {
    out.push_str(&format!("{HEAVY_RULE}\n"));
    out.push_str(&format!(
        "{}\n",
        format!("Testing: {}", skill.skill).blue()
    ));
    out.push_str(&format!("{HEAVY_RULE}\n"));

    for finding in &skill.findings {
        let marker = match finding.severity {
            Severity::Pass => "✓ PASS".green().to_string(),
            Severity::Warn => "⚠ WARN".yellow().to_string(),
            Severity::Fail => "✗ FAIL".red().bold().to_string(),
        };
        out.push_str(&format!("  {marker}: {}\n", finding.message));
    }
    out.push('\n');

    if skill.passed {
        out.push_str(&format!(
            "{}\n\n",
            format!("✓ {}: PASSED", skill.skill).green().bold()
        ));
    } else {
        out.push_str(&format!(
            "{}\n\n",
            format!("✗ {}: FAILED", skill.skill).red().bold()
        ));
    }
}
