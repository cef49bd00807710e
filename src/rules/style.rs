//! Style checks: backslash hygiene, heading structure, code examples.
//!
//! All three are advisory: they can warn but never fail a document.

use crate::finding::Finding;
use crate::rules::{self, RuleInfo};
use regex::Regex;
use std::sync::LazyLock;

/// Markdown heading: one to three `#` characters followed by whitespace,
/// anchored at line start.
static RE_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#{1,3}\s+").unwrap());

/// Fence marker counted for the code-example estimate.
const FENCE: &str = "```";

/// Check 7: backslash hygiene.
///
/// A whole-document presence test: any backslash warns unless the document
/// also contains a `newline\n` literal or a `\s` pattern escape verbatim.
/// Occurrences are not classified individually; one unaccounted backslash
/// warns for the whole document, and escapes such as `\t` are not exempted.
pub(crate) fn check_backslashes(findings: &mut Vec<Finding>, content: &str) {
    let exempted = content.contains("newline\\n") || content.contains("\\s");
    if content.contains('\\') && !exempted {
        findings.push(Finding::warn(
            rules::BACKSLASH_PATH,
            "May contain Windows-style backslashes",
        ));
    } else {
        findings.push(Finding::pass(rules::BACKSLASH_PATH, "No Windows-style paths"));
    }
}

/// Check 8: at least one Markdown heading (levels 1–3) anywhere in the text.
pub(crate) fn check_headings(findings: &mut Vec<Finding>, content: &str) {
    if RE_HEADING.is_match(content) {
        findings.push(Finding::pass(
            rules::HEADINGS,
            "Markdown heading structure present",
        ));
    } else {
        findings.push(Finding::warn(rules::HEADINGS, "No Markdown headings found"));
    }
}

/// Check 9: fenced code examples.
///
/// Counts raw ``` markers across the text; the block estimate is half that,
/// flooring on an unpaired marker. Fewer than two markers warns.
pub(crate) fn check_code_examples(findings: &mut Vec<Finding>, content: &str) {
    let markers = content.matches(FENCE).count();
    let blocks = markers / 2;
    if markers < 2 {
        findings.push(Finding::warn(
            rules::CODE_EXAMPLES,
            format!("Few or no code examples (found {blocks} blocks)"),
        ));
    } else {
        findings.push(Finding::pass(
            rules::CODE_EXAMPLES,
            format!("Contains code examples ({blocks} blocks)"),
        ));
    }
}

pub fn rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            id: rules::BACKSLASH_PATH,
            severity: "warn",
            group: "style",
            message: "Backslashes suggest Windows-style paths",
            remediation: "Use forward slashes in paths (e.g. scripts/run.sh)",
        },
        RuleInfo {
            id: rules::HEADINGS,
            severity: "warn",
            group: "style",
            message: "The body should use Markdown headings for structure",
            remediation: "Add # / ## / ### section headings to the body",
        },
        RuleInfo {
            id: rules::CODE_EXAMPLES,
            severity: "warn",
            group: "style",
            message: "The body should include at least one fenced code example",
            remediation: "Add a fenced ``` code block demonstrating usage",
        },
    ]
}
