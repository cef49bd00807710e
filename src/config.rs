//! Configuration loading and skills-root resolution.
//!
//! # Configuration file
//!
//! The default configuration file is `skillcheck.toml` in the current
//! working directory. Use [`Config::load`] to read it:
//!
//! ```rust,no_run
//! use skillcheck::config::Config;
//!
//! let config = Config::load(None).expect("failed to load config");
//! assert!(config.ignore.is_empty());
//! ```
//!
//! # Root resolution
//!
//! The directory that gets validated is resolved from four sources, most
//! specific first: the CLI argument, the `SKILLCHECK_DIR` environment
//! variable, the `root` key in the config file, and finally the built-in
//! default `.claude/skills`. See [`Config::resolve_root`].

use std::path::{Path, PathBuf};

/// Skills directory used when nothing else is configured.
pub const DEFAULT_ROOT: &str = ".claude/skills";

/// Environment variable that overrides the configured skills directory.
pub const ENV_ROOT: &str = "SKILLCHECK_DIR";

/// File name of the auto-detected configuration file.
pub const CONFIG_FILE: &str = "skillcheck.toml";

/// Main configuration for the validator.
///
/// Loaded from a TOML file (typically `skillcheck.toml`). All fields carry
/// sensible defaults so the config file can be omitted entirely.
///
/// # Examples
///
/// ```toml
/// root = "docs/skills"
/// ignore = ["drafts", "archived-skill"]
/// ```
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Skills directory to validate when neither the CLI argument nor the
    /// `SKILLCHECK_DIR` environment variable is set.
    pub root: Option<PathBuf>,
    /// Skill directory names excluded from discovery.
    pub ignore: Vec<String>,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try `skillcheck.toml` in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns `Err(String)` when:
    /// - The explicit path does not exist.
    /// - The file cannot be read from disk.
    /// - The TOML content fails to parse.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use std::path::Path;
    /// use skillcheck::config::Config;
    ///
    /// // Explicit path
    /// let cfg = Config::load(Some(Path::new("my-config.toml")))?;
    ///
    /// // Auto-detect or default
    /// let cfg = Config::load(None)?;
    /// # Ok::<(), String>(())
    /// ```
    pub fn load(path: Option<&Path>) -> Result<Config, String> {
        let config_path = if let Some(p) = path {
            if p.exists() {
                Some(p.to_path_buf())
            } else {
                return Err(format!("Config file not found: {}", p.display()));
            }
        } else {
            let default_path = Path::new(CONFIG_FILE);
            if default_path.exists() {
                Some(default_path.to_path_buf())
            } else {
                None
            }
        };

        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
                toml::from_str(&content)
                    .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))
            }
            None => Ok(Config::default()),
        }
    }

    /// Resolves the skills directory to validate.
    ///
    /// Precedence, most specific first:
    /// 1. The CLI path argument, when given.
    /// 2. The `SKILLCHECK_DIR` environment variable, when set and non-empty.
    /// 3. The `root` key from the config file.
    /// 4. The built-in default [`DEFAULT_ROOT`].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use skillcheck::config::Config;
    ///
    /// let config = Config::default();
    /// let root = config.resolve_root(Some(PathBuf::from("docs/skills")));
    /// assert_eq!(root, PathBuf::from("docs/skills"));
    /// ```
    pub fn resolve_root(&self, cli_path: Option<PathBuf>) -> PathBuf {
        if let Some(path) = cli_path {
            return path;
        }
        if let Ok(dir) = std::env::var(ENV_ROOT) {
            if !dir.is_empty() {
                return PathBuf::from(dir);
            }
        }
        match &self.root {
            Some(root) => root.clone(),
            None => PathBuf::from(DEFAULT_ROOT),
        }
    }
}
