//! Skill document loading.

use std::path::{Path, PathBuf};

/// One skill document, loaded in full before evaluation.
///
/// The document is read once, never mutated, and dropped as soon as its
/// report has been built. The skill is identified by the name of the
/// directory containing its `SKILL.md`.
#[derive(Debug, Clone)]
pub struct Document {
    pub skill: String,
    pub path: PathBuf,
    pub content: String,
}

impl Document {
    /// Reads a `SKILL.md` into memory.
    ///
    /// # Errors
    ///
    /// Returns `Err(String)` when the file cannot be opened or is not valid
    /// UTF-8. Callers turn this into a per-document failure finding rather
    /// than aborting the run.
    pub fn load(path: &Path) -> Result<Document, String> {
        let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
        Ok(Document {
            skill: skill_name(path),
            path: path.to_path_buf(),
            content,
        })
    }
}

/// Extracts the skill name from a `SKILL.md` path.
///
/// Returns the containing directory's name, or `"unknown"` when the path
/// has no usable parent component (e.g. a bare file name at the root).
pub fn skill_name(skill_md: &Path) -> String {
    skill_md
        .parent()
        .and_then(|dir| dir.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
