//! Frontmatter checks: delimiters, `name`, and `description`.
//!
//! The metadata header is located by pattern search, not structured
//! parsing: the opening sentinel must be line 1, the closing sentinel is
//! searched over a fixed window, and the two fields are matched anywhere in
//! the text with anchored line regexes. Field checks therefore work (and
//! fail) independently of the delimiter checks.

use crate::finding::Finding;
use crate::rules::{self, RuleInfo};
use regex::Regex;
use std::sync::LazyLock;

/// Sentinel line that opens and closes the metadata header.
const DELIMITER: &str = "---";

/// Number of lines after the opener searched for the closing sentinel
/// (lines 2–10, 1-indexed).
const CLOSE_WINDOW: usize = 9;

/// Maximum `name` length in characters.
const NAME_MAX_CHARS: usize = 64;

/// Maximum `description` length in characters.
const DESCRIPTION_MAX_CHARS: usize = 1024;

/// Descriptions under this many characters warn but still count as present.
const DESCRIPTION_SHORT_CHARS: usize = 50;

static RE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^name:\s*(.+)$").unwrap());

static RE_DESCRIPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^description:\s*(.+)$").unwrap());

/// First/second-person phrases that indicate a description is not written
/// in third person.
static RE_FIRST_PERSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(I can|you can|your|I will|I help|you should)\b").unwrap()
});

/// Check 1: the document must open with the `---` sentinel on line 1.
///
/// An empty document has no first line and fails.
pub(crate) fn check_open_delimiter(findings: &mut Vec<Finding>, lines: &[&str]) {
    if lines.first().map(|l| l.trim()) == Some(DELIMITER) {
        findings.push(Finding::pass(
            rules::OPEN_DELIMITER,
            "Frontmatter opens correctly",
        ));
    } else {
        findings.push(Finding::fail(
            rules::OPEN_DELIMITER,
            "Missing opening --- for frontmatter",
        ));
    }
}

/// Check 2: a closing `---` must appear on lines 2–10.
///
/// Returns the 0-based index of the closing line so the substance check can
/// count what follows it. The window is searched over whatever content
/// exists, regardless of check 1's outcome.
pub(crate) fn check_close_delimiter(findings: &mut Vec<Finding>, lines: &[&str]) -> Option<usize> {
    let close = lines
        .iter()
        .enumerate()
        .skip(1)
        .take(CLOSE_WINDOW)
        .find(|(_, line)| line.trim() == DELIMITER)
        .map(|(idx, _)| idx);

    match close {
        Some(_) => findings.push(Finding::pass(
            rules::CLOSE_DELIMITER,
            "Frontmatter closes correctly",
        )),
        None => findings.push(Finding::fail(
            rules::CLOSE_DELIMITER,
            "Missing closing --- for frontmatter",
        )),
    }
    close
}

/// Check 3: `name:` must be present and at most 64 characters.
pub(crate) fn check_name(findings: &mut Vec<Finding>, content: &str) {
    let Some(caps) = RE_NAME.captures(content) else {
        findings.push(Finding::fail(rules::NAME, "Missing 'name' field"));
        return;
    };

    let value = caps[1].trim();
    let chars = value.chars().count();
    if chars > NAME_MAX_CHARS {
        findings.push(Finding::fail(
            rules::NAME,
            format!("Name too long ({chars} chars, max 64)"),
        ));
    } else {
        findings.push(Finding::pass(
            rules::NAME,
            format!("Name present and valid ({chars} chars)"),
        ));
    }
}

/// Check 4: `description:` must be present and at most 1024 characters.
///
/// A short description (under 50 characters) warns and still passes for
/// presence, so it produces two findings. Voice is checked whenever the
/// field is present, even when its length already failed.
pub(crate) fn check_description(findings: &mut Vec<Finding>, content: &str) {
    let Some(caps) = RE_DESCRIPTION.captures(content) else {
        findings.push(Finding::fail(rules::DESCRIPTION, "Missing 'description' field"));
        return;
    };

    let value = caps[1].trim();
    let chars = value.chars().count();
    if chars > DESCRIPTION_MAX_CHARS {
        findings.push(Finding::fail(
            rules::DESCRIPTION,
            format!("Description too long ({chars} chars, max 1024)"),
        ));
    } else if chars < DESCRIPTION_SHORT_CHARS {
        findings.push(Finding::warn(
            rules::DESCRIPTION,
            format!("Description short ({chars} chars)"),
        ));
        findings.push(Finding::pass(rules::DESCRIPTION, "Description present"));
    } else {
        findings.push(Finding::pass(
            rules::DESCRIPTION,
            format!("Description present and valid ({chars} chars)"),
        ));
    }

    if RE_FIRST_PERSON.is_match(value) {
        findings.push(Finding::warn(
            rules::DESCRIPTION_VOICE,
            "Description uses first/second person (should be third person)",
        ));
    } else {
        findings.push(Finding::pass(
            rules::DESCRIPTION_VOICE,
            "Description uses third-person voice",
        ));
    }
}

pub fn rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            id: rules::OPEN_DELIMITER,
            severity: "fail",
            group: "frontmatter",
            message: "The first line must be the --- frontmatter delimiter",
            remediation: "Start SKILL.md with a line containing exactly ---",
        },
        RuleInfo {
            id: rules::CLOSE_DELIMITER,
            severity: "fail",
            group: "frontmatter",
            message: "The frontmatter must close with --- within the first 10 lines",
            remediation: "Add a closing --- line directly after the metadata fields",
        },
        RuleInfo {
            id: rules::NAME,
            severity: "fail",
            group: "frontmatter",
            message: "A name: field must be present and at most 64 characters",
            remediation: "Add a name field to the frontmatter, or shorten it to 64 characters",
        },
        RuleInfo {
            id: rules::DESCRIPTION,
            severity: "fail",
            group: "frontmatter",
            message: "A description: field must be present and at most 1024 characters (at least 50 preferred)",
            remediation: "Add a description field of 50-1024 characters",
        },
        RuleInfo {
            id: rules::DESCRIPTION_VOICE,
            severity: "warn",
            group: "frontmatter",
            message: "The description should be written in third person",
            remediation: "Rewrite the description in third person (e.g. 'Creates...', not 'I can create...')",
        },
    ]
}
