//! Value objects

mod chapter_id;

pub use chapter_id::ChapterId;
