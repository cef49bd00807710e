//! Body checks: overall file length and post-frontmatter substance.

use crate::finding::Finding;
use crate::rules::{self, RuleInfo};

/// Files over this many lines warn; the guidance is to stay under it.
const SOFT_LINE_LIMIT: usize = 500;

/// Files over this many lines fail outright.
const HARD_LINE_LIMIT: usize = 1000;

/// Minimum number of non-empty lines expected after the frontmatter.
const MIN_BODY_LINES: usize = 10;

/// Check 5: total line count.
///
/// Exactly 500 lines is still optimal; 501–1000 warns while remaining
/// acceptable (two findings); 1001 and above fails.
pub(crate) fn check_file_length(findings: &mut Vec<Finding>, lines: &[&str]) {
    let count = lines.len();
    if count > HARD_LINE_LIMIT {
        findings.push(Finding::fail(
            rules::FILE_LENGTH,
            format!("File too long ({count} lines, max 1000)"),
        ));
    } else if count > SOFT_LINE_LIMIT {
        findings.push(Finding::warn(
            rules::FILE_LENGTH,
            format!("File long ({count} lines, under 500 recommended)"),
        ));
        findings.push(Finding::pass(rules::FILE_LENGTH, "File length acceptable"));
    } else {
        findings.push(Finding::pass(
            rules::FILE_LENGTH,
            format!("File length optimal ({count} lines)"),
        ));
    }
}

/// Check 6: at least ten non-empty lines must follow the closing delimiter.
///
/// Emits nothing when check 2 found no closing delimiter: without a bound
/// there is nothing to count, and the missing delimiter already failed on
/// its own.
pub(crate) fn check_substance(
    findings: &mut Vec<Finding>,
    lines: &[&str],
    close_idx: Option<usize>,
) {
    let Some(close_idx) = close_idx else { return };

    let count = lines[close_idx + 1..]
        .iter()
        .filter(|line| !line.trim().is_empty())
        .count();
    if count < MIN_BODY_LINES {
        findings.push(Finding::fail(
            rules::SUBSTANCE,
            format!("Very little content after frontmatter ({count} non-empty lines)"),
        ));
    } else {
        findings.push(Finding::pass(
            rules::SUBSTANCE,
            format!("Substantial content ({count} non-empty lines)"),
        ));
    }
}

pub fn rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            id: rules::FILE_LENGTH,
            severity: "fail",
            group: "body",
            message: "SKILL.md should stay under 500 lines and must stay under 1000",
            remediation: "Trim the body or split the skill into smaller ones",
        },
        RuleInfo {
            id: rules::SUBSTANCE,
            severity: "fail",
            group: "body",
            message: "At least 10 non-empty lines must follow the frontmatter",
            remediation: "Flesh out the skill body with usage instructions and examples",
        },
    ]
}
