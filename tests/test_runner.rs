use std::path::Path;

use skillcheck::config::Config;
use skillcheck::finding::Severity;
use skillcheck::rules;
use skillcheck::runner;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn passing_skill() -> String {
    let mut doc = format!(
        "---\nname: my-skill\ndescription: {}\n---\n\n# Overview\n\n",
        "Validates skill documents for structural problems before publication."
    );
    for step in 1..=10 {
        doc.push_str(&format!("Step {step} keeps the body substantial.\n"));
    }
    doc.push_str("\n```sh\nskill run\n```\n");
    doc
}

fn write_skill(root: &Path, name: &str, content: &str) {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("SKILL.md"), content).unwrap();
}

// ---------------------------------------------------------------------------
// Discovery
// ---------------------------------------------------------------------------

#[test]
fn discovers_skills_sorted_by_path() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["charlie", "alpha", "bravo"] {
        write_skill(dir.path(), name, &passing_skill());
    }

    let report = runner::run(dir.path(), &Config::default()).unwrap();
    let names: Vec<&str> = report.skills.iter().map(|r| r.skill.as_str()).collect();
    assert_eq!(names, ["alpha", "bravo", "charlie"]);
}

#[test]
fn skill_md_outside_depth_two_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    // Directly in the root (too shallow).
    std::fs::write(dir.path().join("SKILL.md"), passing_skill()).unwrap();
    // Two directories down (too deep).
    let nested = dir.path().join("group").join("inner");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(nested.join("SKILL.md"), passing_skill()).unwrap();

    let report = runner::run(dir.path(), &Config::default()).unwrap();
    assert_eq!(report.total(), 0, "only */SKILL.md is discovered");
}

#[test]
fn other_files_in_skill_dirs_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    write_skill(dir.path(), "alpha", &passing_skill());
    std::fs::write(dir.path().join("alpha").join("README.md"), "# Readme").unwrap();

    let report = runner::run(dir.path(), &Config::default()).unwrap();
    assert_eq!(report.total(), 1);
}

#[test]
fn ignored_directories_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_skill(dir.path(), "alpha", &passing_skill());
    write_skill(dir.path(), "drafts", "not even frontmatter\n");

    let config = Config {
        ignore: vec!["drafts".to_string()],
        ..Config::default()
    };
    let report = runner::run(dir.path(), &config).unwrap();
    let names: Vec<&str> = report.skills.iter().map(|r| r.skill.as_str()).collect();
    assert_eq!(names, ["alpha"]);
    assert!(report.all_passed());
}

#[test]
fn missing_root_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = runner::run(&dir.path().join("does-not-exist"), &Config::default());
    let err = result.err().expect("a missing root must abort the run");
    assert!(err.contains("not found"), "got: {err}");
}

#[test]
fn empty_root_is_vacuously_successful() {
    let dir = tempfile::tempdir().unwrap();
    let report = runner::run(dir.path(), &Config::default()).unwrap();
    assert_eq!(report.total(), 0);
    assert_eq!(report.failed(), 0);
    assert!(report.all_passed());
}

// ---------------------------------------------------------------------------
// Evaluation and aggregation
// ---------------------------------------------------------------------------

#[test]
fn totals_are_consistent() {
    let dir = tempfile::tempdir().unwrap();
    write_skill(dir.path(), "good", &passing_skill());
    write_skill(dir.path(), "bad", "no frontmatter\n");
    write_skill(dir.path(), "ugly", "---\nname: ugly\n---\nthin\n");

    let report = runner::run(dir.path(), &Config::default()).unwrap();
    assert_eq!(report.total(), 3);
    assert_eq!(report.passed() + report.failed(), report.total());
    assert_eq!(report.passed(), 1);
    assert_eq!(report.failed(), 2);
    assert!(!report.all_passed());
}

#[test]
fn read_failure_isolates_to_one_document() {
    let dir = tempfile::tempdir().unwrap();
    write_skill(dir.path(), "alpha", &passing_skill());
    // Invalid UTF-8 makes the read fail for this document only.
    let broken = dir.path().join("broken");
    std::fs::create_dir_all(&broken).unwrap();
    std::fs::write(broken.join("SKILL.md"), [0xE2, 0x28, 0xA1]).unwrap();

    let report = runner::run(dir.path(), &Config::default()).unwrap();
    assert_eq!(report.total(), 2);

    let broken_report = &report.skills[1];
    assert_eq!(broken_report.skill, "broken");
    assert!(!broken_report.passed);
    assert_eq!(broken_report.findings.len(), 1);
    assert_eq!(broken_report.findings[0].rule, rules::READ_ERROR);
    assert!(
        broken_report.findings[0].message.starts_with("Error reading file:"),
        "got: {}",
        broken_report.findings[0].message
    );

    assert!(report.skills[0].passed, "the healthy document is unaffected");
}

#[test]
fn warnings_accumulate_across_documents() {
    let dir = tempfile::tempdir().unwrap();
    // Each copy warns at least on headings and code examples.
    write_skill(dir.path(), "alpha", "---\nname: a\ndescription: short\n---\nline\n");
    write_skill(dir.path(), "bravo", "---\nname: b\ndescription: short\n---\nline\n");

    let report = runner::run(dir.path(), &Config::default()).unwrap();
    let per_skill: usize = report.skills.iter().map(|r| r.warn_count()).sum();
    assert_eq!(report.warnings(), per_skill);
    assert!(report.warnings() >= 6);
}

#[test]
fn severity_counters_agree() {
    let dir = tempfile::tempdir().unwrap();
    write_skill(dir.path(), "alpha", "---\nname: a\ndescription: short\n---\nline\n");

    let report = runner::run(dir.path(), &Config::default()).unwrap();
    let skill = &report.skills[0];

    let (passes, warnings, failures) = skill.count_by_severity();
    assert_eq!((passes, warnings, failures), (7, 3, 1));
    assert_eq!(warnings, skill.warn_count());
    assert_eq!(failures, skill.fail_count());
    assert_eq!(passes + warnings + failures, skill.findings.len());
    assert_eq!(skill.passed, failures == 0);
    assert_eq!(Severity::Warn.to_string(), "warn");
}

#[test]
fn repeated_runs_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    write_skill(dir.path(), "good", &passing_skill());
    write_skill(dir.path(), "bad", "no frontmatter\n");

    let first = runner::run(dir.path(), &Config::default()).unwrap();
    let second = runner::run(dir.path(), &Config::default()).unwrap();

    // Everything except the run timestamp must be reproducible.
    assert_eq!(
        serde_json::to_value(&first.skills).unwrap(),
        serde_json::to_value(&second.skills).unwrap()
    );
}

#[test]
fn check_skill_reports_read_failure_for_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let report = runner::check_skill(&dir.path().join("ghost").join("SKILL.md"));
    assert!(!report.passed);
    assert_eq!(report.skill, "ghost");
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].rule, rules::READ_ERROR);
}
