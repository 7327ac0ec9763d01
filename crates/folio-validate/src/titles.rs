//! Chapter Title Validation (DOC006)

use crate::validator_trait::Validator;
use crate::violation::BookViolation;
use crate::{Result, ValidationConfig};
use folio_domain::Book;

/// Flags chapters without any heading
pub struct TitleValidator;

impl Validator for TitleValidator {
    fn name(&self) -> &'static str {
        "titles"
    }

    fn description(&self) -> &'static str {
        "Validates that every chapter has a heading to use as its title"
    }

    fn enabled(&self, config: &ValidationConfig) -> bool {
        config.chapter_titles
    }

    fn validate(&self, book: &Book, _config: &ValidationConfig) -> Result<Vec<BookViolation>> {
        let mut violations = Vec::new();
        for id in book.store().ids() {
            let chapter = book.get(&id)?;
            if chapter.title.is_none() {
                violations.push(BookViolation::MissingChapterTitle {
                    file: chapter.path.clone(),
                    chapter: id,
                });
            }
        }
        Ok(violations)
    }
}
