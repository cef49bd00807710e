//! Output formatting for validation reports.
//!
//! Three formats are supported:
//!
//! | Format | Module | Use case |
//! |--------|--------|----------|
//! | [`Pretty`](OutputFormat::Pretty) | [`pretty`] | Terminal / human review |
//! | [`Json`](OutputFormat::Json)     | [`json`]   | Automation / scripting  |
//! | [`Sarif`](OutputFormat::Sarif)   | [`sarif`]  | CI/CD integration       |
//!
//! Use [`format_run`] to render a [`RunReport`] in any of the above formats.
//!
//! The exit status of the process is derived from the report itself, never
//! from the formatted text; formatting is purely presentational.

pub mod json;
pub mod pretty;
pub mod sarif;

use crate::finding::RunReport;

/// Supported output formats for validation reports.
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text with per-skill sections and a summary.
    Pretty,
    /// Machine-readable JSON.
    Json,
    /// [SARIF 2.1.0](https://sarifweb.azurewebsites.net/) for CI/CD tool integration.
    Sarif,
}

/// Formats a [`RunReport`] in the requested [`OutputFormat`].
///
/// # Examples
///
/// ```rust,no_run
/// use skillcheck::output::{format_run, OutputFormat};
/// # use skillcheck::finding::RunReport;
/// # fn example(report: &RunReport) {
/// let json = format_run(report, &OutputFormat::Json);
/// println!("{json}");
/// # }
/// ```
pub fn format_run(report: &RunReport, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => pretty::format(report),
        OutputFormat::Json => json::format(report),
        OutputFormat::Sarif => sarif::format(report),
    }
}
