//! Validation configuration
//!
//! Deserialized from the `[checks]` section of `folio.toml`. Dangling
//! references and empty parts are always checked.

use serde::{Deserialize, Serialize};

/// Which checks run and how strictly the result is judged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Report chapters the index never references
    pub orphan_chapters: bool,
    /// Report fenced snippets without a dialect tag
    pub snippet_dialects: bool,
    /// Report chapters without any heading
    pub chapter_titles: bool,
    /// Report prose links to chapters that do not exist
    pub cross_links: bool,
    /// Report chapters listed more than once
    pub duplicate_references: bool,
    /// Report draft entries
    pub draft_entries: bool,
    /// Treat warnings as failures
    pub strict: bool,
    /// Allowed snippet dialects; empty allows any
    pub known_dialects: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            orphan_chapters: true,
            snippet_dialects: true,
            chapter_titles: true,
            cross_links: true,
            duplicate_references: true,
            draft_entries: true,
            strict: false,
            known_dialects: Vec::new(),
        }
    }
}

impl ValidationConfig {
    /// Fail on warnings as well as errors
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Allow one more snippet dialect
    pub fn with_known_dialect(mut self, dialect: impl Into<String>) -> Self {
        self.known_dialects.push(dialect.into());
        self
    }

    /// True when `dialect` passes the allow-list (case-insensitive)
    pub fn is_known_dialect(&self, dialect: &str) -> bool {
        self.known_dialects.is_empty()
            || self
                .known_dialects
                .iter()
                .any(|known| known.eq_ignore_ascii_case(dialect))
    }
}
