//! Configuration
//!
//! `folio.toml` sections map onto the types in [`types`]; [`ConfigLoader`]
//! layers defaults, the file and `FOLIO_*` environment variables.

mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, BookConfig, LoggingConfig};
