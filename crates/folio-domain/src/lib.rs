//! Domain layer for Folio
//!
//! Folio models a study notebook: a directory of Markdown chapters plus one
//! index file (`SUMMARY.md`) that groups the chapters into parts and fixes
//! their reading order. This crate holds the pure types of that model and
//! the [`ChapterStore`] port; parsing and file access live in
//! `folio-infrastructure`.
//!
//! ```ignore
//! use folio_domain::{Book, ChapterId};
//!
//! let toc = book.resolve()?;
//! for entry in &toc {
//!     println!("{} {}", entry.chapter, entry.title);
//! }
//! ```

pub mod book;
pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use book::Book;
pub use entities::{
    Chapter, ChapterLink, Part, Section, SectionNumber, Snippet, Summary, SummaryEntry, TocEntry,
};
pub use error::{Error, Result};
pub use ports::ChapterStore;
pub use value_objects::ChapterId;
