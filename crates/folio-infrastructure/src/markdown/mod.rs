//! Markdown parsing
//!
//! Both chapters and the index file are read with `pulldown-cmark` using the
//! offset iterator, so every heading, snippet and entry keeps the line it
//! came from.

mod chapter;
mod lines;
mod summary;

pub use chapter::parse_chapter;
pub use lines::LineIndex;
pub use summary::parse_summary;

use pulldown_cmark::Options;

/// Parser options shared by chapter and index parsing
pub(crate) fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES
}
