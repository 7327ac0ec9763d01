//! Validator Trait
//!
//! Every check implements [`Validator`]; [`ValidatorRegistry`] runs them in
//! registration order.

use crate::violation::BookViolation;
use crate::{
    CrossLinkValidator, IndexValidator, OrphanValidator, Result, SnippetValidator, TitleValidator,
    ValidationConfig,
};
use folio_domain::Book;
use tracing::debug;

/// A single integrity check over a book
pub trait Validator: Send + Sync {
    /// Short machine name
    fn name(&self) -> &'static str;

    /// One-line description
    fn description(&self) -> &'static str;

    /// Whether the check runs under `config`
    fn enabled(&self, _config: &ValidationConfig) -> bool {
        true
    }

    /// Run the check
    fn validate(&self, book: &Book, config: &ValidationConfig) -> Result<Vec<BookViolation>>;
}

/// Ordered collection of validators
#[derive(Default)]
pub struct ValidatorRegistry {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidatorRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in check
    pub fn standard() -> Self {
        Self::new()
            .with(IndexValidator)
            .with(OrphanValidator)
            .with(TitleValidator)
            .with(SnippetValidator)
            .with(CrossLinkValidator)
    }

    /// Add a validator
    pub fn with(mut self, validator: impl Validator + 'static) -> Self {
        self.register(Box::new(validator));
        self
    }

    /// Add a boxed validator
    pub fn register(&mut self, validator: Box<dyn Validator>) {
        self.validators.push(validator);
    }

    /// Names of registered validators, in run order
    pub fn names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    /// Run every enabled validator
    pub fn run(&self, book: &Book, config: &ValidationConfig) -> Result<Vec<BookViolation>> {
        let mut violations = Vec::new();
        for validator in &self.validators {
            if !validator.enabled(config) {
                debug!(validator = validator.name(), "Skipped (disabled)");
                continue;
            }
            let found = validator.validate(book, config)?;
            debug!(validator = validator.name(), count = found.len(), "Validator finished");
            violations.extend(found);
        }
        Ok(violations)
    }
}
