//! Tests for violation metadata

use folio_domain::ChapterId;
use folio_validate::{BookViolation, Severity, Violation, ViolationCategory, ViolationExt};
use std::path::PathBuf;

fn dangling() -> BookViolation {
    BookViolation::DanglingReference {
        chapter: ChapterId::new("ch99.md").unwrap(),
        title: "Later".to_string(),
        file: PathBuf::from("SUMMARY.md"),
        line: 7,
    }
}

#[test]
fn test_dangling_reference_metadata() {
    let v = dangling();
    assert_eq!(v.id(), "DOC001");
    assert_eq!(v.severity(), Severity::Error);
    assert_eq!(v.category(), ViolationCategory::Index);
    assert_eq!(v.line(), Some(7));
    assert!(v.message().contains("ch99.md"));
    assert!(v.suggestion().is_some());
}

#[test]
fn test_orphan_is_warning_without_line() {
    let v = BookViolation::OrphanChapter {
        chapter: ChapterId::new("ch04.md").unwrap(),
        file: PathBuf::from("ch04.md"),
    };
    assert_eq!(v.id(), "DOC002");
    assert_eq!(v.severity(), Severity::Warning);
    assert_eq!(v.line(), None);
}

#[test]
fn test_severity_display_and_order() {
    assert_eq!(Severity::Error.to_string(), "ERROR");
    assert_eq!(Severity::Warning.to_string(), "WARNING");
    assert!(Severity::Error < Severity::Info);
}

#[test]
fn test_into_boxed_keeps_ids() {
    let boxed = vec![dangling(), dangling()].into_boxed();
    assert_eq!(boxed.len(), 2);
    assert!(boxed.iter().all(|v| v.id() == "DOC001"));
}
