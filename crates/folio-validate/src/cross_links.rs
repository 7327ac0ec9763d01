//! Cross-Link Validation (DOC007)
//!
//! Chapters refer to each other only through prose links; a link whose
//! target looks like a chapter must resolve to one.

use crate::validator_trait::Validator;
use crate::violation::BookViolation;
use crate::{Result, ValidationConfig};
use folio_domain::Book;

/// Broken prose link validator
pub struct CrossLinkValidator;

impl Validator for CrossLinkValidator {
    fn name(&self) -> &'static str {
        "cross_links"
    }

    fn description(&self) -> &'static str {
        "Validates that links between chapters point at existing chapters"
    }

    fn enabled(&self, config: &ValidationConfig) -> bool {
        config.cross_links
    }

    fn validate(&self, book: &Book, _config: &ValidationConfig) -> Result<Vec<BookViolation>> {
        let store = book.store();
        let mut violations = Vec::new();
        for id in store.ids() {
            let chapter = store.get(&id)?;
            for (link, target) in chapter.chapter_links() {
                if !store.contains(&target) {
                    violations.push(BookViolation::BrokenCrossLink {
                        chapter: id.clone(),
                        target: link.target.clone(),
                        file: chapter.path.clone(),
                        line: link.line,
                    });
                }
            }
        }
        Ok(violations)
    }
}
