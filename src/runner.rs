//! Run orchestration.
//!
//! [`run`] is the main entry-point for validating a skills directory. It
//! discovers every `*/SKILL.md` exactly one directory level below the root,
//! evaluates each document sequentially in path order, and accumulates the
//! per-document reports into a [`RunReport`].
//!
//! Evaluation is strictly sequential and synchronous: one document at a
//! time, in a deterministic order, with no shared state beyond the run
//! report being built. A document that cannot be read yields a single
//! failure finding and the run continues with the next one; only a
//! discovery failure on the root itself aborts the run.

use crate::config::Config;
use crate::document::{self, Document};
use crate::finding::{RunReport, SkillReport};
use crate::rules;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name every skill document must use.
pub const SKILL_FILE: &str = "SKILL.md";

/// Finds every `SKILL.md` exactly one directory level below `root`,
/// sorted by path for reproducible report ordering.
///
/// Directories whose name appears in `ignore` are skipped. An empty result
/// is not an error: a root with no skills is a valid, vacuously-successful
/// run.
///
/// # Errors
///
/// Returns `Err(String)` when `root` is missing or not a directory, or when
/// the directory walk itself fails (e.g. an unreadable directory). No
/// partial result is returned in that case.
pub fn discover_skills(root: &Path, ignore: &[String]) -> Result<Vec<PathBuf>, String> {
    if !root.is_dir() {
        return Err(format!("skills directory not found: {}", root.display()));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(root).min_depth(2).max_depth(2) {
        let entry =
            entry.map_err(|e| format!("failed to scan {}: {e}", root.display()))?;
        if !entry.file_type().is_file() || entry.file_name() != SKILL_FILE {
            continue;
        }
        let skill = document::skill_name(entry.path());
        if ignore.iter().any(|name| name == &skill) {
            continue;
        }
        paths.push(entry.into_path());
    }

    paths.sort();
    Ok(paths)
}

/// Evaluates one skill document.
///
/// A read or decode failure becomes the document's sole (failing) finding;
/// this function never returns an error, so one bad document can never
/// abort a run.
pub fn check_skill(skill_md: &Path) -> SkillReport {
    match Document::load(skill_md) {
        Ok(doc) => rules::evaluate(&doc),
        Err(e) => SkillReport::read_failure(
            document::skill_name(skill_md),
            skill_md.to_path_buf(),
            &e,
        ),
    }
}

/// Validates every skill under `root` and returns the aggregate report.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use skillcheck::{config::Config, runner};
///
/// let config = Config::default();
/// let run = runner::run(Path::new(".claude/skills"), &config).unwrap();
/// std::process::exit(if run.all_passed() { 0 } else { 1 });
/// ```
///
/// # Errors
///
/// Propagates the discovery error from [`discover_skills`]; per-document
/// failures never surface here.
pub fn run(root: &Path, config: &Config) -> Result<RunReport, String> {
    let skills = discover_skills(root, &config.ignore)?;

    let mut report = RunReport::new(root.to_path_buf());
    for skill_md in &skills {
        report.record(check_skill(skill_md));
    }
    Ok(report)
}
