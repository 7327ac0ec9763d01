//! Filesystem chapter store
//!
//! Walks the book root once, parses every Markdown file and keeps the
//! chapters in memory. The index file itself is not a chapter.

use crate::error_ext::ErrorContext;
use crate::markdown::parse_chapter;
use folio_domain::{Chapter, ChapterId, ChapterStore, Error, Result};
use globset::GlobSet;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

/// Chapters read from a directory tree
#[derive(Debug)]
pub struct FsChapterStore {
    chapters: BTreeMap<ChapterId, Chapter>,
}

impl FsChapterStore {
    /// Read every chapter below `root`
    ///
    /// `index` is skipped wherever it is spelled relative to `root`; files
    /// whose root-relative path matches `exclude` are skipped; hidden files
    /// and directories are skipped.
    pub fn open(root: &Path, index: Option<&Path>, exclude: &GlobSet) -> Result<Self> {
        let index = index.and_then(|p| std::fs::canonicalize(p).ok());
        let mut chapters = BTreeMap::new();

        for entry in WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        {
            let entry = entry.map_err(|e| {
                Error::io_with_source(format!("Failed to walk {}", root.display()), e)
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let Ok(relative) = path.strip_prefix(root) else {
                continue;
            };
            if exclude.is_match(relative) {
                trace!(path = %relative.display(), "Excluded");
                continue;
            }
            let Some(id) = ChapterId::from_relative_path(relative) else {
                continue;
            };
            if !id.is_markdown() || is_index(path, index.as_deref()) {
                trace!(path = %relative.display(), "Skipped");
                continue;
            }

            let content = std::fs::read_to_string(path)
                .io_context(format!("Failed to read chapter {}", path.display()))?;
            debug!(chapter = %id, "Loaded chapter");
            chapters.insert(id.clone(), parse_chapter(id, path, content));
        }

        Ok(Self { chapters })
    }
}

fn is_index(path: &Path, index: Option<&Path>) -> bool {
    index.is_some_and(|index| {
        std::fs::canonicalize(path).is_ok_and(|canonical| canonical == index)
    })
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

impl ChapterStore for FsChapterStore {
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
