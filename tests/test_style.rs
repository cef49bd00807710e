use std::path::PathBuf;

use skillcheck::document::Document;
use skillcheck::finding::{Finding, Severity, SkillReport};
use skillcheck::rules;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn evaluate(content: &str) -> SkillReport {
    let doc = Document {
        skill: "test-skill".to_string(),
        path: PathBuf::from("test-skill/SKILL.md"),
        content: content.to_string(),
    };
    rules::evaluate(&doc)
}

fn single<'a>(report: &'a SkillReport, rule: &str) -> &'a Finding {
    let matches: Vec<&Finding> = report.findings.iter().filter(|f| f.rule == rule).collect();
    assert_eq!(
        matches.len(),
        1,
        "expected exactly one {rule} finding, got {matches:?}"
    );
    matches[0]
}

// ---------------------------------------------------------------------------
// Rule: style/backslash-path
// ---------------------------------------------------------------------------

#[test]
fn backslash_warns() {
    let report = evaluate("Run the script at C:\\scripts\\deploy.bat\n");
    let f = single(&report, rules::BACKSLASH_PATH);
    assert_eq!(f.severity, Severity::Warn);
    assert_eq!(f.message, "May contain Windows-style backslashes");
}

#[test]
fn no_backslash_passes() {
    let report = evaluate("Run scripts/deploy.sh to get started.\n");
    let f = single(&report, rules::BACKSLASH_PATH);
    assert_eq!(f.severity, Severity::Pass);
}

#[test]
fn newline_escape_mention_exempts_the_whole_document() {
    // The exemption is document-wide: one accepted idiom silences the
    // check even when other backslashes exist.
    let report = evaluate("End each record with a literal newline\\n marker.\nAlso C:\\temp.\n");
    assert_eq!(single(&report, rules::BACKSLASH_PATH).severity, Severity::Pass);
}

#[test]
fn regex_escape_mention_exempts_the_whole_document() {
    let report = evaluate("Use \\s to match any whitespace character.\n");
    assert_eq!(single(&report, rules::BACKSLASH_PATH).severity, Severity::Pass);
}

#[test]
fn tab_escape_is_not_exempt() {
    let report = evaluate("Use \\t to separate the columns.\n");
    assert_eq!(single(&report, rules::BACKSLASH_PATH).severity, Severity::Warn);
}

#[test]
fn backslash_warning_does_not_fail_document() {
    let content = format!(
        "---\nname: my-skill\ndescription: {}\n---\n# Body\nUse C:\\bin on Windows hosts.\n{}```\ncode\n```\n",
        "x".repeat(60),
        "line\n".repeat(10),
    );
    let report = evaluate(&content);
    assert!(report.passed, "stray backslashes warn, they never fail");
}

// ---------------------------------------------------------------------------
// Rule: style/headings
// ---------------------------------------------------------------------------

#[test]
fn level_three_heading_passes() {
    let report = evaluate("### Setup\nsome text\n");
    let f = single(&report, rules::HEADINGS);
    assert_eq!(f.severity, Severity::Pass);
}

#[test]
fn level_four_heading_does_not_count() {
    let report = evaluate("#### Too deep\nsome text\n");
    assert_eq!(single(&report, rules::HEADINGS).severity, Severity::Warn);
}

#[test]
fn hash_without_trailing_space_does_not_count() {
    let report = evaluate("#hashtag\nand an inline # marker\n");
    assert_eq!(single(&report, rules::HEADINGS).severity, Severity::Warn);
}

#[test]
fn no_headings_warns() {
    let report = evaluate("just prose\nnothing else\n");
    let f = single(&report, rules::HEADINGS);
    assert_eq!(f.severity, Severity::Warn);
    assert_eq!(f.message, "No Markdown headings found");
}

// ---------------------------------------------------------------------------
// Rule: style/code-examples
// ---------------------------------------------------------------------------

#[test]
fn no_fence_markers_warn() {
    let report = evaluate("no code here\n");
    let f = single(&report, rules::CODE_EXAMPLES);
    assert_eq!(f.severity, Severity::Warn);
    assert_eq!(f.message, "Few or no code examples (found 0 blocks)");
}

#[test]
fn single_fence_marker_warns_as_zero_blocks() {
    let report = evaluate("```\nan unclosed block\n");
    let f = single(&report, rules::CODE_EXAMPLES);
    assert_eq!(f.severity, Severity::Warn);
    assert_eq!(f.message, "Few or no code examples (found 0 blocks)");
}

#[test]
fn one_complete_block_passes() {
    let report = evaluate("```sh\nskill run\n```\n");
    let f = single(&report, rules::CODE_EXAMPLES);
    assert_eq!(f.severity, Severity::Pass);
    assert_eq!(f.message, "Contains code examples (1 blocks)");
}

#[test]
fn odd_marker_count_floors_the_block_estimate() {
    let report = evaluate("```\ncode\n```\ntext\n```\n");
    let f = single(&report, rules::CODE_EXAMPLES);
    assert_eq!(f.severity, Severity::Pass);
    assert_eq!(f.message, "Contains code examples (1 blocks)");
}

#[test]
fn missing_fences_is_the_only_warning_in_an_otherwise_clean_document() {
    let content = format!(
        "---\nname: my-skill\ndescription: {}\n---\n# Body\n{}",
        "x".repeat(60),
        "Each step is written out in full prose.\n".repeat(20),
    );
    let report = evaluate(&content);
    assert!(report.passed);
    assert_eq!(report.warn_count(), 1, "only the fence check should warn");
    assert_eq!(single(&report, rules::CODE_EXAMPLES).severity, Severity::Warn);
}
