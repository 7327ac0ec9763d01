//! Book location configuration

use crate::constants::DEFAULT_EXCLUDE_PATTERNS;
use folio_domain::constants::DEFAULT_SUMMARY_FILE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[book]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    /// Book root directory
    pub root: PathBuf,
    /// Index file, relative to `root` unless absolute
    pub summary: PathBuf,
    /// Globs (relative to `root`) of files that are not chapters
    pub exclude: Vec<String>,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            summary: PathBuf::from(DEFAULT_SUMMARY_FILE),
            exclude: DEFAULT_EXCLUDE_PATTERNS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}
