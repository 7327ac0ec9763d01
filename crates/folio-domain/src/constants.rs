//! Domain constants

/// Default file name of the index/summary file at the book root
pub const DEFAULT_SUMMARY_FILE: &str = "SUMMARY.md";

/// File extensions recognised as chapter files (compared case-insensitively)
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Link schemes that never point at a chapter
pub const EXTERNAL_LINK_PREFIXES: &[&str] = &["mailto:", "tel:", "data:"];
