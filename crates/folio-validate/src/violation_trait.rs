//! Violation Trait
//!
//! Generic trait for all notebook violations, so reporting can treat every
//! validator's output the same way.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::PathBuf;

// Re-export Severity from parent module for convenience
pub use super::Severity;

/// Category of violation for grouping in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ViolationCategory {
    /// Index/summary integrity (dangling, orphan, empty parts, duplicates)
    Index,
    /// Chapter content (titles, snippets)
    Content,
    /// Prose links between chapters
    Links,
}

impl Display for ViolationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index => write!(f, "Index"),
            Self::Content => write!(f, "Content"),
            Self::Links => write!(f, "Links"),
        }
    }
}

/// Generic violation trait - all violations implement this
pub trait Violation: Display + Send + Sync {
    /// Unique violation ID (e.g., "DOC001")
    fn id(&self) -> &str;

    /// Category for grouping in reports
    fn category(&self) -> ViolationCategory;

    /// Severity level
    fn severity(&self) -> Severity;

    /// File where violation occurred (if applicable)
    fn file(&self) -> Option<&PathBuf>;

    /// Line number where violation occurred (if applicable)
    fn line(&self) -> Option<usize>;

    /// Human-readable message describing the violation
    fn message(&self) -> String {
        self.to_string()
    }

    /// Suggested fix for the violation (if applicable)
    fn suggestion(&self) -> Option<String> {
        None
    }
}

/// Extension trait for converting violations to boxed trait objects
pub trait ViolationExt {
    /// Convert to a vector of boxed violations
    fn into_boxed(self) -> Vec<Box<dyn Violation>>;
}

impl<T: Violation + 'static> ViolationExt for Vec<T> {
    fn into_boxed(self) -> Vec<Box<dyn Violation>> {
        self.into_iter()
            .map(|v| Box::new(v) as Box<dyn Violation>)
            .collect()
    }
}
