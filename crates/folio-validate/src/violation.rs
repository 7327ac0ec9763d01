//! Notebook violations
//!
//! | id     | violation             | severity |
//! |--------|-----------------------|----------|
//! | DOC001 | DanglingReference     | Error    |
//! | DOC002 | OrphanChapter         | Warning  |
//! | DOC003 | MissingSnippetDialect | Warning  |
//! | DOC004 | EmptyPart             | Error    |
//! | DOC005 | DuplicateReference    | Info     |
//! | DOC006 | MissingChapterTitle   | Warning  |
//! | DOC007 | BrokenCrossLink       | Warning  |
//! | DOC008 | UnknownSnippetDialect | Warning  |
//! | DOC009 | DraftEntry            | Info     |

use crate::violation_trait::{Severity, Violation, ViolationCategory};
use folio_domain::ChapterId;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Every integrity problem a notebook can have
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookViolation {
    DanglingReference {
        chapter: ChapterId,
        title: String,
        file: PathBuf,
        line: usize,
    },
    OrphanChapter {
        chapter: ChapterId,
        file: PathBuf,
    },
    MissingSnippetDialect {
        chapter: ChapterId,
        file: PathBuf,
        line: usize,
    },
    EmptyPart {
        part: String,
        file: PathBuf,
        line: usize,
    },
    DuplicateReference {
        chapter: ChapterId,
        first_line: usize,
        file: PathBuf,
        line: usize,
    },
    MissingChapterTitle {
        chapter: ChapterId,
        file: PathBuf,
    },
    BrokenCrossLink {
        chapter: ChapterId,
        target: String,
        file: PathBuf,
        line: usize,
    },
    UnknownSnippetDialect {
        chapter: ChapterId,
        dialect: String,
        file: PathBuf,
        line: usize,
    },
    DraftEntry {
        title: String,
        file: PathBuf,
        line: usize,
    },
}

impl std::fmt::Display for BookViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DanglingReference { chapter, title, .. } => write!(
                f,
                "Dangling reference: index entry '{title}' points at missing chapter {chapter}"
            ),
            Self::OrphanChapter { chapter, .. } => {
                write!(f, "Orphan chapter: {chapter} is not reachable from the index")
            }
            Self::MissingSnippetDialect { chapter, line, .. } => write!(
                f,
                "Snippet without dialect tag in {chapter} at line {line}"
            ),
            Self::EmptyPart { part, .. } => {
                write!(f, "Empty part: '{part}' lists no chapters")
            }
            Self::DuplicateReference {
                chapter,
                first_line,
                ..
            } => write!(
                f,
                "Duplicate reference: {chapter} already listed at line {first_line}"
            ),
            Self::MissingChapterTitle { chapter, .. } => {
                write!(f, "Chapter {chapter} has no heading")
            }
            Self::BrokenCrossLink {
                chapter,
                target,
                line,
                ..
            } => write!(
                f,
                "Broken link in {chapter} at line {line}: {target} does not resolve to a chapter"
            ),
            Self::UnknownSnippetDialect {
                chapter,
                dialect,
                line,
                ..
            } => write!(
                f,
                "Unknown snippet dialect '{dialect}' in {chapter} at line {line}"
            ),
            Self::DraftEntry { title, .. } => {
                write!(f, "Draft entry '{title}' has no chapter yet")
            }
        }
    }
}

impl Violation for BookViolation {
    fn id(&self) -> &str {
        match self {
            Self::DanglingReference { .. } => "DOC001",
            Self::OrphanChapter { .. } => "DOC002",
            Self::MissingSnippetDialect { .. } => "DOC003",
            Self::EmptyPart { .. } => "DOC004",
            Self::DuplicateReference { .. } => "DOC005",
            Self::MissingChapterTitle { .. } => "DOC006",
            Self::BrokenCrossLink { .. } => "DOC007",
            Self::UnknownSnippetDialect { .. } => "DOC008",
            Self::DraftEntry { .. } => "DOC009",
        }
    }

    fn category(&self) -> ViolationCategory {
        match self {
            Self::DanglingReference { .. }
            | Self::OrphanChapter { .. }
            | Self::EmptyPart { .. }
            | Self::DuplicateReference { .. }
            | Self::DraftEntry { .. } => ViolationCategory::Index,
            Self::MissingSnippetDialect { .. }
            | Self::MissingChapterTitle { .. }
            | Self::UnknownSnippetDialect { .. } => ViolationCategory::Content,
            Self::BrokenCrossLink { .. } => ViolationCategory::Links,
        }
    }

    fn severity(&self) -> Severity {
        match self {
            Self::DanglingReference { .. } | Self::EmptyPart { .. } => Severity::Error,
            Self::OrphanChapter { .. }
            | Self::MissingSnippetDialect { .. }
            | Self::MissingChapterTitle { .. }
            | Self::BrokenCrossLink { .. }
            | Self::UnknownSnippetDialect { .. } => Severity::Warning,
            Self::DuplicateReference { .. } | Self::DraftEntry { .. } => Severity::Info,
        }
    }

    fn file(&self) -> Option<&PathBuf> {
        match self {
            Self::DanglingReference { file, .. }
            | Self::OrphanChapter { file, .. }
            | Self::MissingSnippetDialect { file, .. }
            | Self::EmptyPart { file, .. }
            | Self::DuplicateReference { file, .. }
            | Self::MissingChapterTitle { file, .. }
            | Self::BrokenCrossLink { file, .. }
            | Self::UnknownSnippetDialect { file, .. }
            | Self::DraftEntry { file, .. } => Some(file),
        }
    }

    fn line(&self) -> Option<usize> {
        match self {
            Self::DanglingReference { line, .. }
            | Self::MissingSnippetDialect { line, .. }
            | Self::EmptyPart { line, .. }
            | Self::DuplicateReference { line, .. }
            | Self::BrokenCrossLink { line, .. }
            | Self::UnknownSnippetDialect { line, .. }
            | Self::DraftEntry { line, .. } => Some(*line),
            Self::OrphanChapter { .. } | Self::MissingChapterTitle { .. } => None,
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            Self::DanglingReference { chapter, .. } => Some(format!(
                "Create {chapter} or fix the link target in the index"
            )),
            Self::OrphanChapter { chapter, .. } => Some(format!(
                "List {chapter} in the index, or delete it if it is an old copy"
            )),
            Self::MissingSnippetDialect { .. } => {
                Some("Tag the opening fence, e.g. ```js".to_string())
            }
            Self::EmptyPart { .. } => {
                Some("Add chapters under the part heading or remove it".to_string())
            }
            Self::MissingChapterTitle { .. } => {
                Some("Start the chapter with a level-1 heading".to_string())
            }
            Self::BrokenCrossLink { .. } => {
                Some("Point the link at an existing chapter".to_string())
            }
            Self::UnknownSnippetDialect { .. } => {
                Some("Use one of checks.known_dialects or extend the list".to_string())
            }
            Self::DuplicateReference { .. } | Self::DraftEntry { .. } => None,
        }
    }
}
