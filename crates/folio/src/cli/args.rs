//! CLI argument definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Folio - study-notebook integrity checker
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Book root directory (overrides `book.root`)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Index file, relative to the root (overrides `book.summary`)
    #[arg(short, long, global = true)]
    pub summary: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the integrity checks and print a report
    Check {
        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,

        /// Fail on warnings as well as errors
        #[arg(long)]
        strict: bool,
    },

    /// Print the resolved table of contents
    Toc,

    /// Print chapter ids in index order
    List,

    /// Print one chapter's outline
    Show {
        /// Chapter id, e.g. `js/scope.md`
        id: String,

        /// Print the raw Markdown instead of the outline
        #[arg(long)]
        raw: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

/// Report output format for `check`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Terminal report grouped by category
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
    /// Markdown summary with GitHub Actions annotations
    Ci,
}

impl Cli {
    /// Fold the global flags into a loaded configuration
    pub fn apply_overrides(&self, config: &mut folio_infrastructure::AppConfig) {
        if let Some(root) = &self.root {
            config.book.root.clone_from(root);
        }
        if let Some(summary) = &self.summary {
            config.book.summary.clone_from(summary);
        }
        if let Command::Check { strict: true, .. } = self.command {
            config.checks.strict = true;
        }
    }
}
