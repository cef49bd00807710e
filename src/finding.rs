//! Core report types.
//!
//! A validation run produces one [`SkillReport`] per skill document, each
//! holding an ordered list of [`Finding`]s, and a single [`RunReport`]
//! accumulating the per-document results and the aggregate counters.

use std::fmt;
use std::path::PathBuf;

/// Outcome class of a single check finding.
///
/// `Fail` findings decide the document verdict; `Warn` findings only feed
/// the aggregate warning counter; `Pass` findings are recorded so the
/// report shows every check that ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Pass,
    Warn,
    Fail,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Pass => write!(f, "pass"),
            Severity::Warn => write!(f, "warn"),
            Severity::Fail => write!(f, "fail"),
        }
    }
}

/// One check's categorized output for one document.
///
/// Findings are appended in check order and never removed; they are purely
/// observational and never cut the remaining checks short.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Finding {
    /// Identifier of the rule that produced this finding (e.g. `frontmatter/name`).
    pub rule: &'static str,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn pass(rule: &'static str, message: impl Into<String>) -> Self {
        Finding {
            rule,
            severity: Severity::Pass,
            message: message.into(),
        }
    }

    pub fn warn(rule: &'static str, message: impl Into<String>) -> Self {
        Finding {
            rule,
            severity: Severity::Warn,
            message: message.into(),
        }
    }

    pub fn fail(rule: &'static str, message: impl Into<String>) -> Self {
        Finding {
            rule,
            severity: Severity::Fail,
            message: message.into(),
        }
    }
}

/// Validation result for one skill document.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SkillReport {
    /// Skill name: the document's containing directory.
    pub skill: String,
    /// Path of the `SKILL.md` that was evaluated.
    pub path: PathBuf,
    /// `true` iff no finding has [`Severity::Fail`].
    pub passed: bool,
    pub findings: Vec<Finding>,
}

impl SkillReport {
    /// Builds a report from an ordered finding list, deriving the verdict.
    pub fn from_findings(skill: String, path: PathBuf, findings: Vec<Finding>) -> Self {
        let passed = !findings.iter().any(|f| f.severity == Severity::Fail);
        SkillReport {
            skill,
            path,
            passed,
            findings,
        }
    }

    /// Degenerate report for a document that could not be read.
    ///
    /// The read failure is the sole finding; no other check runs for the
    /// document, and the run continues with the next one.
    pub fn read_failure(skill: String, path: PathBuf, error: &str) -> Self {
        let finding = Finding::fail(
            crate::rules::READ_ERROR,
            format!("Error reading file: {error}"),
        );
        SkillReport {
            skill,
            path,
            passed: false,
            findings: vec![finding],
        }
    }

    pub fn warn_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warn)
            .count()
    }

    pub fn fail_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Fail)
            .count()
    }

    /// Count pass, warn, and fail findings in a single pass.
    ///
    /// Returns `(passes, warnings, failures)`. Prefer this over separate
    /// `warn_count()` + `fail_count()` calls when all three values are
    /// needed at the same time (e.g. the summary line).
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        self.findings
            .iter()
            .fold((0, 0, 0), |(p, w, f), finding| match finding.severity {
                Severity::Pass => (p + 1, w, f),
                Severity::Warn => (p, w + 1, f),
                Severity::Fail => (p, w, f + 1),
            })
    }
}

/// Aggregate result of one validation run.
///
/// Built incrementally while the runner walks the discovered documents;
/// the per-skill reports stay in discovery order. The run report lives only
/// for the duration of one run; there is no cross-run state.
#[derive(Debug, serde::Serialize)]
pub struct RunReport {
    /// The skills root that was scanned.
    pub root: PathBuf,
    /// RFC 3339 timestamp taken when the run started.
    pub generated_at: String,
    pub skills: Vec<SkillReport>,
}

impl RunReport {
    pub fn new(root: PathBuf) -> Self {
        RunReport {
            root,
            generated_at: chrono::Utc::now().to_rfc3339(),
            skills: Vec::new(),
        }
    }

    /// Appends one document's report, preserving discovery order.
    pub fn record(&mut self, report: SkillReport) {
        self.skills.push(report);
    }

    pub fn total(&self) -> usize {
        self.skills.len()
    }

    pub fn passed(&self) -> usize {
        self.skills.iter().filter(|r| r.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.skills.iter().filter(|r| !r.passed).count()
    }

    /// Warn findings summed across all documents. A single document can
    /// contribute several warnings, so this may exceed [`total`](Self::total).
    pub fn warnings(&self) -> usize {
        self.skills.iter().map(|r| r.warn_count()).sum()
    }

    pub fn all_passed(&self) -> bool {
        self.skills.iter().all(|r| r.passed)
    }
}
