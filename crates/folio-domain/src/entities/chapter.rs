//! Chapter entity

use crate::value_objects::ChapterId;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A heading inside a chapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading level, 1 through 6
    pub level: u8,
    /// Heading text with inline markup flattened
    pub title: String,
    /// 1-based line of the heading
    pub line: usize,
}

/// A fenced code block embedded in a chapter
///
/// Snippets are illustrative only; the dialect exists for syntax
/// highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// First token of the fence info string (`js`, `jsx`, `css`, ...)
    pub dialect: Option<String>,
    /// 1-based line of the opening fence
    pub line: usize,
    /// Snippet text
    pub code: String,
}

impl Snippet {
    /// True when the fence carries a non-empty dialect tag
    pub fn has_dialect(&self) -> bool {
        self.dialect.as_deref().is_some_and(|d| !d.trim().is_empty())
    }
}

/// A link found in chapter prose
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterLink {
    /// Raw link destination as written
    pub target: String,
    /// 1-based line of the link
    pub line: usize,
}

/// A single documentation unit covering one topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Stable identifier (root-relative path)
    pub id: ChapterId,
    /// Where the chapter was read from
    pub path: PathBuf,
    /// Text of the first level-1 heading, else the first heading
    pub title: Option<String>,
    /// Headings in document order
    pub sections: Vec<Section>,
    /// Fenced snippets in document order
    pub snippets: Vec<Snippet>,
    /// Outgoing prose links in document order
    pub links: Vec<ChapterLink>,
    /// Raw Markdown
    pub content: String,
}

impl Chapter {
    /// Title to show for the chapter, falling back to the file stem
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or_else(|| self.id.file_stem())
    }

    /// Snippets without a dialect tag
    pub fn untagged_snippets(&self) -> impl Iterator<Item = &Snippet> {
        self.snippets.iter().filter(|s| !s.has_dialect())
    }

    /// Links that point at other chapters of the book, resolved to ids
    pub fn chapter_links(&self) -> impl Iterator<Item = (&ChapterLink, ChapterId)> {
        self.links.iter().filter_map(|link| {
            self.id
                .resolve_link(&link.target)
                .filter(ChapterId::is_markdown)
                .map(|id| (link, id))
        })
    }
}
