//! Domain entities
//!
//! [`Chapter`] is the unit of content; [`Summary`] is the parsed index that
//! orders chapters into [`Part`]s and resolves to [`TocEntry`] rows.

mod chapter;
mod summary;

pub use chapter::{Chapter, ChapterLink, Section, Snippet};
pub use summary::{Part, SectionNumber, Summary, SummaryEntry, TocEntry};
