//! Infrastructure layer for Folio
//!
//! Everything that touches the outside world: reading chapter files from disk,
//! parsing Markdown with `pulldown-cmark`, loading `folio.toml` through Figment
//! and setting up `tracing` output.

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod loader;
pub mod logging;
pub mod markdown;
pub mod store;

pub use config::{AppConfig, BookConfig, ConfigLoader, LoggingConfig};
pub use loader::BookLoader;
pub use markdown::{parse_chapter, parse_summary};
pub use store::{FsChapterStore, InMemoryChapterStore};
