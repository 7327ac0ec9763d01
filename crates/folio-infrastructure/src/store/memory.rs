//! In-memory chapter store

use crate::markdown::parse_chapter;
use folio_domain::{Chapter, ChapterId, ChapterStore, Error, Result};
use std::collections::BTreeMap;

/// Chapters built from `(path, markdown)` pairs
#[derive(Debug, Default)]
pub struct InMemoryChapterStore {
    chapters: BTreeMap<ChapterId, Chapter>,
}

impl InMemoryChapterStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from `(path, markdown)` pairs
    pub fn from_sources<I, P, C>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, C)>,
        P: AsRef<str>,
        C: Into<String>,
    {
        let mut store = Self::new();
        for (path, content) in sources {
            store.insert(path.as_ref(), content)?;
        }
        Ok(store)
    }

    /// Parse and add one chapter, replacing any chapter with the same id
    pub fn insert(&mut self, path: &str, content: impl Into<String>) -> Result<ChapterId> {
        let id = ChapterId::new(path)?;
        let chapter = parse_chapter(id.clone(), id.as_str(), content.into());
        self.chapters.insert(id.clone(), chapter);
        Ok(id)
    }
}

impl ChapterStore for InMemoryChapterStore {
    fn get(&self, id: &ChapterId) -> Result<&Chapter> {
        self.chapters
            .get(id)
            .ok_or_else(|| Error::not_found(format!("chapter {id}")))
    }

    fn ids(&self) -> Vec<ChapterId> {
        self.chapters.keys().cloned().collect()
    }

    fn contains(&self, id: &ChapterId) -> bool {
        self.chapters.contains_key(id)
    }

    fn len(&self) -> usize {
        self.chapters.len()
    }
}
