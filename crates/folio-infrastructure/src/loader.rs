//! Book loader
//!
//! Reads the index file and the chapter tree of one book directory.

use crate::config::BookConfig;
use crate::markdown::parse_summary;
use crate::store::{FsChapterStore, build_globset};
use folio_domain::{Book, ChapterStore, Error, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

/// Loads a [`Book`] from disk
#[derive(Debug, Clone)]
pub struct BookLoader {
    root: PathBuf,
    summary: PathBuf,
    exclude: Vec<String>,
}

impl BookLoader {
    /// Loader for `root` with the default index file and exclude patterns
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let defaults = BookConfig::default();
        Self {
            root: root.into(),
            summary: defaults.summary,
            exclude: defaults.exclude,
        }
    }

    /// Loader configured from the `[book]` section
    pub fn from_config(config: &BookConfig) -> Self {
        Self {
            root: config.root.clone(),
            summary: config.summary.clone(),
            exclude: config.exclude.clone(),
        }
    }

    /// Use a different index file (relative to the root unless absolute)
    pub fn with_summary(mut self, summary: impl Into<PathBuf>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Add an exclude glob
    pub fn with_exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude.push(pattern.into());
        self
    }

    /// Book root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute or root-joined path of the index file
    pub fn summary_path(&self) -> PathBuf {
        if self.summary.is_absolute() {
            self.summary.clone()
        } else {
            self.root.join(&self.summary)
        }
    }

    /// Read the index and every chapter
    pub fn load(&self) -> Result<Book> {
        if !self.root.is_dir() {
            return Err(Error::not_found(format!(
                "book directory {}",
                self.root.display()
            )));
        }

        let summary_path = self.summary_path();
        let text = std::fs::read_to_string(&summary_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                Error::not_found(format!("index file {}", summary_path.display()))
            }
            ErrorKind::InvalidData => Error::parse(&summary_path, "index file is not valid UTF-8"),
            _ => Error::io_with_source(
                format!("Failed to read index file {}", summary_path.display()),
                e,
            ),
        })?;
        let summary = parse_summary(&text);

        let exclude = build_globset(&self.exclude)?;
        let store = FsChapterStore::open(&self.root, Some(&summary_path), &exclude)?;

        info!(
            root = %self.root.display(),
            parts = summary.parts.len(),
            chapters = store.len(),
            "Book loaded"
        );
        Ok(Book::new(
            self.root.clone(),
            summary_path,
            summary,
            Box::new(store),
        ))
    }
}
