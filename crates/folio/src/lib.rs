//! # Folio
//!
//! Content model and integrity checker for Markdown study notebooks: a
//! directory of chapter files plus one index file (`SUMMARY.md`) that groups
//! them into parts.
//!
//! ## Example
//!
//! ```ignore
//! use folio::{BookLoader, BookValidator, Reporter, ValidationConfig};
//!
//! let book = BookLoader::new("notes").load()?;
//! for entry in book.resolve()? {
//!     println!("{} {}", entry.chapter, entry.title);
//! }
//!
//! let report = BookValidator::new(ValidationConfig::default()).validate(&book)?;
//! println!("{}", Reporter::to_human_readable(&report));
//! ```
//!
//! ## Architecture
//!
//! - `domain` - chapters, the index, the chapter store port and domain errors
//! - `validate` - integrity checks and report rendering
//! - `infrastructure` - Markdown parsing, filesystem store, config and logging
//! - `cli` - the `folio` command line

/// Domain layer - core types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use folio_domain::*;
}

/// Validation layer - integrity checks and reports
///
/// Re-exports from the validate crate for convenience
pub mod validate {
    pub use folio_validate::*;
}

/// Infrastructure layer - loading, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use folio_infrastructure::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use infrastructure::{AppConfig, BookLoader, ConfigLoader};
pub use validate::{BookValidator, Reporter, ValidationConfig, ValidationReport};
