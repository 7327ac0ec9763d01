//! Index/Summary entity
//!
//! The summary is the table-of-contents artifact. It owns no chapters; it
//! only refers to them by [`ChapterId`], and [`Summary::resolve`] is where
//! those references are checked against a [`ChapterStore`].

use crate::error::{Error, Result};
use crate::ports::ChapterStore;
use crate::value_objects::ChapterId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// One line of the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    /// Link text
    pub title: String,
    /// Referenced chapter; `None` for a draft written as `[Title]()`
    pub target: Option<ChapterId>,
    /// 0 for prefix/suffix links outside any list, else list nesting depth
    pub depth: usize,
    /// 1-based line in the index file
    pub line: usize,
}

impl SummaryEntry {
    /// True for a draft entry with no target
    pub fn is_draft(&self) -> bool {
        self.target.is_none()
    }
}

/// A named group of entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Part heading; `None` for entries that precede the first heading
    pub title: Option<String>,
    /// 1-based line of the part heading
    pub line: Option<usize>,
    /// Entries in declaration order
    pub entries: Vec<SummaryEntry>,
}

impl Part {
    /// Create an empty part
    pub fn new(title: Option<String>, line: Option<usize>) -> Self {
        Self {
            title,
            line,
            entries: Vec::new(),
        }
    }

    /// Number of entries that reference a chapter
    pub fn chapter_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_draft()).count()
    }
}

/// Parsed index file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Book title (a leading level-1 heading)
    pub title: Option<String>,
    /// Parts in declaration order
    pub parts: Vec<Part>,
}

/// Hierarchical number of a list entry, rendered as `1.2.`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionNumber(pub Vec<u32>);

impl fmt::Display for SectionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in &self.0 {
            write!(f, "{n}.")?;
        }
        Ok(())
    }
}

/// One row of the resolved table of contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Title of the part the entry belongs to
    pub part: Option<String>,
    /// Chapter the entry points at
    pub chapter: ChapterId,
    /// Link text from the index
    pub title: String,
    /// Nesting depth copied from the index entry
    pub depth: usize,
    /// Section number for list entries; prefix/suffix chapters have none
    pub number: Option<SectionNumber>,
}

impl Summary {
    /// All entries paired with their part, in declaration order
    pub fn entries(&self) -> impl Iterator<Item = (&Part, &SummaryEntry)> {
        self.parts
            .iter()
            .flat_map(|part| part.entries.iter().map(move |entry| (part, entry)))
    }

    /// Entries that reference a chapter, with the referenced id
    pub fn references(&self) -> impl Iterator<Item = (&Part, &SummaryEntry, &ChapterId)> {
        self.entries()
            .filter_map(|(part, entry)| entry.target.as_ref().map(|id| (part, entry, id)))
    }

    /// Chapter ids in reading order, each id once (first occurrence wins)
    pub fn chapter_ids(&self) -> Vec<ChapterId> {
        let mut seen = HashSet::new();
        self.references()
            .filter(|(_, _, id)| seen.insert(*id))
            .map(|(_, _, id)| id.clone())
            .collect()
    }

    /// True when the index references `id` at least once
    pub fn references_chapter(&self, id: &ChapterId) -> bool {
        self.references().any(|(_, _, target)| target == id)
    }

    /// Referenced ids that the store does not hold, in index order
    pub fn dangling(&self, store: &dyn ChapterStore) -> Vec<ChapterId> {
        let mut seen = HashSet::new();
        self.references()
            .filter(|(_, _, id)| !store.contains(id) && seen.insert(*id))
            .map(|(_, _, id)| id.clone())
            .collect()
    }

    /// Resolve the index into an ordered table of contents
    ///
    /// Fails with [`Error::DanglingReference`] naming every referenced id the
    /// store does not hold. Drafts are skipped but still advance section
    /// numbering; duplicates appear at each position they are listed. Entries
    /// nested under unlinked list items are numbered from their nearest
    /// numbered ancestor.
    pub fn resolve(&self, store: &dyn ChapterStore) -> Result<Vec<TocEntry>> {
        let missing = self.dangling(store);
        if !missing.is_empty() {
            return Err(Error::dangling(missing));
        }

        let mut counters: Vec<u32> = Vec::new();
        let mut toc = Vec::new();
        for (part, entry) in self.entries() {
            let number = if entry.depth == 0 {
                None
            } else {
                // A plain-text list item is not an entry, so its children may
                // sit deeper than any numbered ancestor.
                let level = entry.depth.min(counters.len() + 1);
                counters.truncate(level);
                counters.resize(level, 0);
                counters[level - 1] += 1;
                Some(SectionNumber(counters.clone()))
            };

            if let Some(chapter) = &entry.target {
                toc.push(TocEntry {
                    part: part.title.clone(),
                    chapter: chapter.clone(),
                    title: entry.title.clone(),
                    depth: entry.depth,
                    number,
                });
            }
        }
        Ok(toc)
    }
}
