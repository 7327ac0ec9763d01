//! Command implementations
//!
//! Each command writes to the given sink so the binary can hand it stdout
//! and tests can hand it a buffer.

use super::OutputFormat;
use anyhow::{Context, Result};
use folio_domain::{Book, ChapterId};
use folio_infrastructure::{AppConfig, BookLoader, ConfigLoader};
use folio_validate::{BookValidator, Reporter};
use std::io::Write;
use tracing::debug;

/// Load the book described by `config`
pub fn load_book(config: &AppConfig) -> Result<Book> {
    let loader = BookLoader::from_config(&config.book);
    loader
        .load()
        .with_context(|| format!("Failed to load book from {}", loader.root().display()))
}

/// Run every enabled check; returns whether the report passed
pub fn check(
    book: &Book,
    config: &AppConfig,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<bool> {
    let report = BookValidator::new(config.checks.clone()).validate(book)?;
    let rendered = match format {
        OutputFormat::Human => Reporter::to_human_readable(&report),
        OutputFormat::Json => Reporter::to_json(&report)?,
        OutputFormat::Ci => Reporter::to_ci_summary(&report),
    };
    writeln!(out, "{}", rendered.trim_end())?;
    Ok(report.summary.passed)
}

/// Print the resolved table of contents
pub fn toc(book: &Book, out: &mut dyn Write) -> Result<()> {
    let entries = book.resolve()?;
    if let Some(title) = &book.summary().title {
        writeln!(out, "{title}\n")?;
    }

    let mut current_part: Option<&str> = None;
    for entry in &entries {
        let part = entry.part.as_deref();
        if part != current_part {
            if let Some(part) = part {
                writeln!(out, "\n{part}")?;
            }
            current_part = part;
        }
        let indent = "  ".repeat(entry.depth);
        match &entry.number {
            Some(number) => writeln!(out, "{indent}{number} {} ({})", entry.title, entry.chapter)?,
            None => writeln!(out, "{indent}{} ({})", entry.title, entry.chapter)?,
        }
    }
    debug!(entries = entries.len(), "Table of contents printed");
    Ok(())
}

/// Print chapter ids in index order
pub fn list(book: &Book, out: &mut dyn Write) -> Result<()> {
    for id in book.list() {
        writeln!(out, "{id}")?;
    }
    Ok(())
}

/// Print one chapter's outline, or its raw Markdown
pub fn show(book: &Book, id: &str, raw: bool, out: &mut dyn Write) -> Result<()> {
    let id = ChapterId::from_link(id)
        .with_context(|| format!("'{id}' is not a chapter path"))?;
    let chapter = book.get(&id)?;

    if raw {
        write!(out, "{}", chapter.content)?;
        return Ok(());
    }

    writeln!(out, "{}", chapter.display_title())?;
    writeln!(out, "  id:   {}", chapter.id)?;
    writeln!(out, "  file: {}", chapter.path.display())?;
    if !book.summary().references_chapter(&chapter.id) {
        writeln!(out, "  (not listed in the index)")?;
    }

    if !chapter.sections.is_empty() {
        writeln!(out, "\nSections:")?;
        for section in &chapter.sections {
            let indent = "  ".repeat(usize::from(section.level));
            writeln!(out, "{indent}{} (line {})", section.title, section.line)?;
        }
    }

    let untagged = chapter.untagged_snippets().count();
    writeln!(
        out,
        "\nSnippets: {} ({untagged} without dialect)",
        chapter.snippets.len()
    )?;
    Ok(())
}

/// Print the effective configuration
pub fn config(config: &AppConfig, out: &mut dyn Write) -> Result<()> {
    write!(out, "{}", ConfigLoader::to_toml(config)?)?;
    Ok(())
}
