//! Tests for the validator registry and the top-level validator

use crate::test_utils::{FUNDAMENTALS_INDEX, book, titled};
use folio_validate::{
    BookValidator, IndexValidator, OrphanValidator, ValidationConfig, ValidatorRegistry,
};

#[test]
fn test_standard_registry_order() {
    let registry = ValidatorRegistry::standard();
    assert_eq!(
        registry.names(),
        vec!["index_integrity", "orphans", "titles", "snippets", "cross_links"]
    );
}

#[test]
fn test_custom_registry_runs_only_its_validators() {
    let ch = titled("Any");
    let ch = ch.as_str();
    let book = book("- [A](a.md)\n- [Gone](gone.md)\n", &[("a.md", ch), ("b.md", ch)]);

    let registry = ValidatorRegistry::new().with(OrphanValidator);
    let validator = BookValidator::with_registry(ValidationConfig::default(), registry);
    let report = validator.validate(&book).unwrap();

    assert_eq!(report.summary.total_violations, 1);
    assert_eq!(report.violations[0].id, "DOC002");
}

#[test]
fn test_orphan_alone_passes_unless_strict() {
    let ch = titled("Any");
    let ch = ch.as_str();
    let chapters = [
        ("ch01.md", ch),
        ("ch02.md", ch),
        ("ch03.md", ch),
        ("ch04.md", ch),
    ];

    let lenient = BookValidator::new(ValidationConfig::default())
        .validate(&book(FUNDAMENTALS_INDEX, &chapters))
        .unwrap();
    assert!(lenient.summary.passed);
    assert_eq!(lenient.summary.warning_count, 1);

    let strict = BookValidator::new(ValidationConfig::default().with_strict(true))
        .validate(&book(FUNDAMENTALS_INDEX, &chapters))
        .unwrap();
    assert!(!strict.summary.passed);
    assert!(strict.summary.strict);
}

#[test]
fn test_dangling_reference_fails_report() {
    let ch = titled("Any");
    let ch = ch.as_str();
    let book = book(FUNDAMENTALS_INDEX, &[("ch01.md", ch), ("ch02.md", ch)]);

    let report = BookValidator::new(ValidationConfig::default())
        .validate(&book)
        .unwrap();
    assert!(!report.summary.passed);
    assert_eq!(report.summary.error_count, 1);
    assert_eq!(report.summary.by_id.get("DOC001"), Some(&1));
    assert_eq!(report.summary.chapter_count, 2);
    assert_eq!(report.summary.part_count, 1);
}

#[test]
fn test_index_validator_metadata() {
    use folio_validate::Validator;
    assert_eq!(IndexValidator.name(), "index_integrity");
    assert!(!IndexValidator.description().is_empty());
}
