//! The `folio` command line
//!
//! | Command | Description |
//! |---------|-------------|
//! | `folio check [--format human\|json\|ci] [--strict]` | Integrity report, exit 1 when it fails |
//! | `folio toc` | Resolved table of contents |
//! | `folio list` | Chapter ids in index order |
//! | `folio show <id> [--raw]` | Chapter outline or raw Markdown |
//! | `folio config` | Effective configuration as TOML |

mod args;
pub mod commands;

pub use args::{Cli, Command, OutputFormat};

use anyhow::Result;
use folio_infrastructure::AppConfig;
use std::io::Write;

/// Outcome of a command that ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Command succeeded
    Success,
    /// `check` produced a failing report
    ChecksFailed,
}

/// Run `command` against an already-loaded configuration
pub fn run(command: &Command, config: &AppConfig, out: &mut dyn Write) -> Result<Outcome> {
    match command {
        Command::Config => commands::config(config, out)?,
        Command::Check { format, .. } => {
            let book = commands::load_book(config)?;
            if !commands::check(&book, config, *format, out)? {
                return Ok(Outcome::ChecksFailed);
            }
        }
        Command::Toc => commands::toc(&commands::load_book(config)?, out)?,
        Command::List => commands::list(&commands::load_book(config)?, out)?,
        Command::Show { id, raw } => commands::show(&commands::load_book(config)?, id, *raw, out)?,
    }
    Ok(Outcome::Success)
}
