//! Snippet Dialect Validation
//!
//! - DOC003: every fenced snippet declares a dialect tag
//! - DOC008: the tag is on the configured allow-list (when one is set)

use crate::validator_trait::Validator;
use crate::violation::BookViolation;
use crate::{Result, ValidationConfig};
use folio_domain::Book;

/// Snippet dialect validator
pub struct SnippetValidator;

impl Validator for SnippetValidator {
    fn name(&self) -> &'static str {
        "snippets"
    }

    fn description(&self) -> &'static str {
        "Validates that fenced snippets carry a known dialect tag"
    }

    fn enabled(&self, config: &ValidationConfig) -> bool {
        config.snippet_dialects
    }

    fn validate(&self, book: &Book, config: &ValidationConfig) -> Result<Vec<BookViolation>> {
        let mut violations = Vec::new();
        for id in book.store().ids() {
            let chapter = book.get(&id)?;
            for snippet in &chapter.snippets {
                match snippet.dialect.as_deref().map(str::trim) {
                    None | Some("") => violations.push(BookViolation::MissingSnippetDialect {
                        chapter: id.clone(),
                        file: chapter.path.clone(),
                        line: snippet.line,
                    }),
                    Some(dialect) if !config.is_known_dialect(dialect) => {
                        violations.push(BookViolation::UnknownSnippetDialect {
                            chapter: id.clone(),
                            dialect: dialect.to_string(),
                            file: chapter.path.clone(),
                            line: snippet.line,
                        });
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(violations)
    }
}
