//! The rule engine.
//!
//! [`evaluate`] runs every check against one document in a fixed order and
//! collects the findings. Checks are independent: a failing check never
//! prevents a later one from running, so a document missing its opening
//! delimiter is still searched for a closing delimiter, fields, and style
//! problems. The one data dependency is the substance check, which counts
//! lines after the closing delimiter found by check 2 and emits nothing
//! when there is none.
//!
//! # Rules
//!
//! | Rule | Severity | What it checks |
//! |------|----------|----------------|
//! | `frontmatter/open-delimiter` | fail | line 1 is `---` |
//! | `frontmatter/close-delimiter` | fail | `---` on lines 2–10 |
//! | `frontmatter/name` | fail | `name:` present, ≤ 64 chars |
//! | `frontmatter/description` | fail/warn | `description:` present, ≤ 1024 chars, ≥ 50 preferred |
//! | `frontmatter/description-voice` | warn | third-person wording |
//! | `body/file-length` | fail/warn | ≤ 1000 lines hard, ≤ 500 preferred |
//! | `body/substance` | fail | ≥ 10 non-empty lines after the frontmatter |
//! | `style/backslash-path` | warn | no stray backslashes |
//! | `style/headings` | warn | at least one `#`–`###` heading |
//! | `style/code-examples` | warn | at least one fenced code block |
//! | `document/read-error` | fail | file readable as UTF-8 |

pub mod body;
pub mod frontmatter;
pub mod style;

use crate::document::Document;
use crate::finding::SkillReport;

// Rule identifiers, shared by the checks, the catalogue, and the runner.
pub const OPEN_DELIMITER: &str = "frontmatter/open-delimiter";
pub const CLOSE_DELIMITER: &str = "frontmatter/close-delimiter";
pub const NAME: &str = "frontmatter/name";
pub const DESCRIPTION: &str = "frontmatter/description";
pub const DESCRIPTION_VOICE: &str = "frontmatter/description-voice";
pub const FILE_LENGTH: &str = "body/file-length";
pub const SUBSTANCE: &str = "body/substance";
pub const BACKSLASH_PATH: &str = "style/backslash-path";
pub const HEADINGS: &str = "style/headings";
pub const CODE_EXAMPLES: &str = "style/code-examples";
pub const READ_ERROR: &str = "document/read-error";

/// Evaluates every check against one document.
///
/// Findings appear in check order; the verdict fails iff at least one
/// finding has [`Severity::Fail`](crate::finding::Severity::Fail).
/// Warnings never affect the verdict, only the aggregate warning count.
///
/// # Examples
///
/// ```
/// use skillcheck::document::Document;
/// use skillcheck::rules;
///
/// let doc = Document {
///     skill: "demo".to_string(),
///     path: "demo/SKILL.md".into(),
///     content: "no frontmatter here".to_string(),
/// };
/// let report = rules::evaluate(&doc);
/// assert!(!report.passed);
/// ```
pub fn evaluate(doc: &Document) -> SkillReport {
    let lines: Vec<&str> = doc.content.lines().collect();
    let mut findings = Vec::new();

    frontmatter::check_open_delimiter(&mut findings, &lines);
    let close_idx = frontmatter::check_close_delimiter(&mut findings, &lines);
    frontmatter::check_name(&mut findings, &doc.content);
    frontmatter::check_description(&mut findings, &doc.content);
    body::check_file_length(&mut findings, &lines);
    body::check_substance(&mut findings, &lines, close_idx);
    style::check_backslashes(&mut findings, &doc.content);
    style::check_headings(&mut findings, &doc.content);
    style::check_code_examples(&mut findings, &doc.content);

    SkillReport::from_findings(doc.skill.clone(), doc.path.clone(), findings)
}

/// Metadata for a single validation rule.
///
/// Returned by [`all_rules`] and used by the `list-rules` and `explain`
/// CLI commands. Each rule module exposes a `rules()` function that returns
/// its own entries.
pub struct RuleInfo {
    /// Unique rule identifier (e.g. `frontmatter/name`).
    pub id: &'static str,
    /// Worst severity the rule can emit (`"fail"` or `"warn"`).
    pub severity: &'static str,
    /// Rule group (`frontmatter`, `body`, `style`, `document`).
    pub group: &'static str,
    /// Short description of what the rule checks.
    pub message: &'static str,
    /// Guidance on how to fix a violation.
    pub remediation: &'static str,
}

/// Aggregates [`RuleInfo`] from every rule module, in check order.
pub fn all_rules() -> Vec<RuleInfo> {
    let mut rules = Vec::new();
    rules.extend(frontmatter::rules());
    rules.extend(body::rules());
    rules.extend(style::rules());
    rules.push(RuleInfo {
        id: READ_ERROR,
        severity: "fail",
        group: "document",
        message: "SKILL.md must be readable as UTF-8 text",
        remediation: "Ensure the file exists, is readable, and is valid UTF-8",
    });
    rules
}
