//! Integrity validation for Folio notebooks
//!
//! Checks a [`Book`] against the rules a study notebook is expected to keep:
//! - every chapter the index lists exists (DOC001)
//! - every chapter is reachable from the index (DOC002)
//! - fenced snippets declare a dialect (DOC003, DOC008)
//! - declared parts are not empty (DOC004)
//! - duplicates, drafts, untitled chapters and broken prose links are surfaced
//!   (DOC005, DOC009, DOC006, DOC007)
//!
//! ```ignore
//! use folio_validate::{BookValidator, Reporter, ValidationConfig};
//!
//! let validator = BookValidator::new(ValidationConfig::default());
//! let report = validator.validate(&book)?;
//! println!("{}", Reporter::to_human_readable(&report));
//! ```

pub mod violation_trait;

pub mod config;
pub mod reporter;
pub mod validator_trait;
pub mod violation;

pub mod cross_links;
pub mod index_integrity;
pub mod orphans;
pub mod snippets;
pub mod titles;

use folio_domain::Book;
use thiserror::Error;
use tracing::{debug, info};

pub use config::ValidationConfig;
pub use cross_links::CrossLinkValidator;
pub use index_integrity::IndexValidator;
pub use orphans::OrphanValidator;
pub use reporter::{Reporter, ValidationReport, ValidationSummary, ViolationEntry};
pub use snippets::SnippetValidator;
pub use titles::TitleValidator;
pub use validator_trait::{Validator, ValidatorRegistry};
pub use violation::BookViolation;
pub use violation_trait::{Violation, ViolationCategory, ViolationExt};

/// Result type for validation operations
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Validation error types
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error(transparent)]
    Domain(#[from] folio_domain::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Severity level for violations
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Warning => write!(f, "WARNING"),
            Self::Info => write!(f, "INFO"),
        }
    }
}

/// Main validator that runs every enabled check over a book
pub struct BookValidator {
    config: ValidationConfig,
    registry: ValidatorRegistry,
}

impl BookValidator {
    /// Validator with the standard checks
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            config,
            registry: ValidatorRegistry::standard(),
        }
    }

    /// Validator with a custom set of checks
    pub fn with_registry(config: ValidationConfig, registry: ValidatorRegistry) -> Self {
        Self { config, registry }
    }

    /// Get the validation configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Run all enabled validators and collect the raw violations
    pub fn violations(&self, book: &Book) -> Result<Vec<BookViolation>> {
        self.registry.run(book, &self.config)
    }

    /// Run all validations and return a comprehensive report
    pub fn validate(&self, book: &Book) -> Result<ValidationReport> {
        let violations = self.violations(book)?;
        debug!(count = violations.len(), "Validation finished");

        let report = ValidationReport::new(book, &violations, self.config.strict);
        info!(
            errors = report.summary.error_count,
            warnings = report.summary.warning_count,
            passed = report.summary.passed,
            "Book validated"
        );
        Ok(report)
    }
}
