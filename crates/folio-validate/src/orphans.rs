//! Orphan Chapter Validation (DOC002)
//!
//! A stored chapter that the index never references. Reported as a warning:
//! the notebook keeps old or variant copies of some chapters on purpose.

use crate::validator_trait::Validator;
use crate::violation::BookViolation;
use crate::{Result, ValidationConfig};
use folio_domain::Book;

/// Orphan chapter validator
pub struct OrphanValidator;

impl Validator for OrphanValidator {
    fn name(&self) -> &'static str {
        "orphans"
    }

    fn description(&self) -> &'static str {
        "Validates that every chapter is reachable from the index"
    }

    fn enabled(&self, config: &ValidationConfig) -> bool {
        config.orphan_chapters
    }

    fn validate(&self, book: &Book, _config: &ValidationConfig) -> Result<Vec<BookViolation>> {
        let mut violations = Vec::new();
        for id in book.orphans() {
            let chapter = book.get(&id)?;
            violations.push(BookViolation::OrphanChapter {
                file: chapter.path.clone(),
                chapter: id,
            });
        }
        Ok(violations)
    }
}
