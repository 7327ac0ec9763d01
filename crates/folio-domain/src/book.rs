//! Document set
//!
//! A [`Book`] ties one parsed index to the chapter store it indexes.

use crate::entities::{Chapter, Summary, TocEntry};
use crate::error::Result;
use crate::ports::ChapterStore;
use crate::value_objects::ChapterId;
use std::path::{Path, PathBuf};

/// An index plus the chapters it indexes
pub struct Book {
    root: PathBuf,
    summary_path: PathBuf,
    summary: Summary,
    store: Box<dyn ChapterStore>,
}

impl Book {
    /// Assemble a book from its parts
    pub fn new(
        root: impl Into<PathBuf>,
        summary_path: impl Into<PathBuf>,
        summary: Summary,
        store: Box<dyn ChapterStore>,
    ) -> Self {
        Self {
            root: root.into(),
            summary_path: summary_path.into(),
            summary,
            store,
        }
    }

    /// Book root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the index file
    pub fn summary_path(&self) -> &Path {
        &self.summary_path
    }

    /// Parsed index
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Underlying chapter store
    pub fn store(&self) -> &dyn ChapterStore {
        self.store.as_ref()
    }

    /// Fetch one chapter
    pub fn get(&self, id: &ChapterId) -> Result<&Chapter> {
        self.store.get(id)
    }

    /// Chapter ids in the order the index declares them
    pub fn list(&self) -> Vec<ChapterId> {
        self.summary.chapter_ids()
    }

    /// Resolve the index against the store
    pub fn resolve(&self) -> Result<Vec<TocEntry>> {
        self.summary.resolve(self.store.as_ref())
    }

    /// Stored chapters the index never references, sorted
    pub fn orphans(&self) -> Vec<ChapterId> {
        self.store
            .ids()
            .into_iter()
            .filter(|id| !self.summary.references_chapter(id))
            .collect()
    }
}

impl std::fmt::Debug for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Book")
            .field("root", &self.root)
            .field("summary_path", &self.summary_path)
            .field("chapters", &self.store.len())
            .finish()
    }
}
