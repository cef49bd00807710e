//! # skillcheck
//!
//! Structure and style validation for `SKILL.md` documents.
//!
//! `skillcheck` walks a skills directory, runs a fixed battery of checks
//! against every `*/SKILL.md` it finds, and produces reports in
//! human-readable, JSON, or [SARIF] formats. Structural defects (broken
//! frontmatter, missing fields, too little content) fail a skill; style
//! defects (short description, wrong voice, missing headings) only warn.
//! The process exits 0 when every skill passed and 1 otherwise, so the
//! tool can gate CI.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use skillcheck::{config::Config, output, runner};
//!
//! let config = Config::load(None).expect("failed to load config");
//! let report = runner::run(Path::new(".claude/skills"), &config)
//!     .expect("skills directory not found");
//!
//! if report.all_passed() {
//!     println!("All skills passed!");
//! } else {
//!     let text = output::format_run(&report, &output::OutputFormat::Pretty);
//!     print!("{text}");
//! }
//! ```
//!
//! ## Architecture
//!
//! The crate is organized around a pipeline:
//!
//! 1. **[`config`]**: load configuration from TOML and resolve the skills root.
//! 2. **[`runner`]**: discover `*/SKILL.md` documents and evaluate them
//!    sequentially in path order.
//! 3. **[`document`]**: one loaded skill document ([`document::Document`]).
//! 4. **[`rules`]**: the check battery ([`rules::evaluate`]) split into
//!    frontmatter, body, and style groups.
//! 5. **[`finding`]**: core data types ([`finding::Finding`],
//!    [`finding::SkillReport`], [`finding::RunReport`]).
//! 6. **[`output`]**: format reports as pretty text, JSON, or SARIF.
//!
//! ## Rule groups
//!
//! | Group | Checks | Verdict impact |
//! |-------|--------|----------------|
//! | `frontmatter` | delimiters, `name:`, `description:`, voice | FAIL except voice |
//! | `body` | file length, content after frontmatter | FAIL (length warns first) |
//! | `style` | backslashes, headings, code examples | WARN only |
//!
//! [SARIF]: https://sarifweb.azurewebsites.net/

pub mod config;
pub mod document;
pub mod finding;
pub mod output;
pub mod rules;
pub mod runner;
