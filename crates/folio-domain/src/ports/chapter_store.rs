//! Chapter Store Port
//!
//! Holds the text of each chapter and exposes it by [`ChapterId`]. Stores are
//! read-only: authoring happens out of band.

use crate::entities::Chapter;
use crate::error::Result;
use crate::value_objects::ChapterId;

/// Read-only access to the chapters of a book
pub trait ChapterStore: Send + Sync {
    /// Fetch a chapter, failing with `NotFound` for an unknown id
    fn get(&self, id: &ChapterId) -> Result<&Chapter>;

    /// Every stored chapter id, sorted
    fn ids(&self) -> Vec<ChapterId>;

    /// True if the store holds `id`
    fn contains(&self, id: &ChapterId) -> bool {
        self.get(id).is_ok()
    }

    /// Number of stored chapters
    fn len(&self) -> usize {
        self.ids().len()
    }

    /// True when the store holds no chapters
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
