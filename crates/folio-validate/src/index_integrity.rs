//! Index Integrity Validation
//!
//! Checks the index against the chapter store:
//! - DOC001: every listed chapter exists
//! - DOC004: every declared part lists at least one chapter
//! - DOC005: a chapter is listed only once (informational)
//! - DOC009: draft entries (informational)

use crate::validator_trait::Validator;
use crate::violation::BookViolation;
use crate::{Result, ValidationConfig};
use folio_domain::{Book, ChapterId};
use std::collections::HashMap;

/// Index/summary integrity validator
pub struct IndexValidator;

impl IndexValidator {
    /// DOC001: listed chapters missing from the store, one per index entry
    pub fn dangling_references(&self, book: &Book) -> Vec<BookViolation> {
        let store = book.store();
        book.summary()
            .references()
            .filter(|(_, _, id)| !store.contains(id))
            .map(|(_, entry, id)| BookViolation::DanglingReference {
                chapter: id.clone(),
                title: entry.title.clone(),
                file: book.summary_path().to_path_buf(),
                line: entry.line,
            })
            .collect()
    }

    /// DOC004: titled parts without any chapter
    pub fn empty_parts(&self, book: &Book) -> Vec<BookViolation> {
        book.summary()
            .parts
            .iter()
            .filter(|part| part.chapter_count() == 0)
            .filter_map(|part| {
                part.title.as_ref().map(|title| BookViolation::EmptyPart {
                    part: title.clone(),
                    file: book.summary_path().to_path_buf(),
                    line: part.line.unwrap_or(1),
                })
            })
            .collect()
    }

    /// DOC005: second and later listings of the same chapter
    pub fn duplicate_references(&self, book: &Book) -> Vec<BookViolation> {
        let mut first_seen: HashMap<&ChapterId, usize> = HashMap::new();
        let mut violations = Vec::new();
        for (_, entry, id) in book.summary().references() {
            match first_seen.get(id) {
                Some(&first_line) => violations.push(BookViolation::DuplicateReference {
                    chapter: id.clone(),
                    first_line,
                    file: book.summary_path().to_path_buf(),
                    line: entry.line,
                }),
                None => {
                    first_seen.insert(id, entry.line);
                }
            }
        }
        violations
    }

    /// DOC009: entries without a target
    pub fn draft_entries(&self, book: &Book) -> Vec<BookViolation> {
        book.summary()
            .entries()
            .filter(|(_, entry)| entry.is_draft())
            .map(|(_, entry)| BookViolation::DraftEntry {
                title: entry.title.clone(),
                file: book.summary_path().to_path_buf(),
                line: entry.line,
            })
            .collect()
    }
}

impl Validator for IndexValidator {
    fn name(&self) -> &'static str {
        "index_integrity"
    }

    fn description(&self) -> &'static str {
        "Validates that the index references existing chapters in non-empty parts"
    }

    fn validate(&self, book: &Book, config: &ValidationConfig) -> Result<Vec<BookViolation>> {
        let mut violations = self.dangling_references(book);
        violations.extend(self.empty_parts(book));
        if config.duplicate_references {
            violations.extend(self.duplicate_references(book));
        }
        if config.draft_entries {
            violations.extend(self.draft_entries(book));
        }
        Ok(violations)
    }
}
