//! Port traits implemented by outer layers

mod chapter_store;

pub use chapter_store::ChapterStore;
