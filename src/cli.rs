use clap::{Parser, Subcommand};
use skillcheck::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skillcheck",
    version,
    about = "Structure and style validation for SKILL.md documents"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate every skill under a skills directory
    Check {
        /// Skills directory (defaults to SKILLCHECK_DIR, then the
        /// configured root, then .claude/skills)
        path: Option<PathBuf>,

        /// Output format
        #[arg(long, short, default_value = "pretty", value_enum)]
        format: OutputFormat,

        /// Write output to file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List all built-in rules with descriptions
    ListRules,

    /// Show full explanation for a rule
    Explain {
        /// Rule ID (e.g., "frontmatter/name")
        rule_id: String,
    },
}
