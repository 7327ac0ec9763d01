//! End-to-end checks of notebooks loaded from disk

use crate::test_utils::{load, write_chapter, write_file, write_fundamentals_index};
use folio_validate::{BookValidator, Severity, ValidationConfig};
use tempfile::TempDir;

#[test]
fn test_clean_notebook_passes_strict() {
    let temp = TempDir::new().unwrap();
    write_fundamentals_index(&temp);
    write_chapter(&temp, "ch01.md", "Variables");
    write_chapter(&temp, "ch02.md", "Functions");
    write_chapter(&temp, "ch03.md", "Objects");

    let report = BookValidator::new(ValidationConfig::default().with_strict(true))
        .validate(&load(&temp))
        .unwrap();

    assert!(report.summary.passed, "violations: {:?}", report.violations);
    assert_eq!(report.summary.total_violations, 0);
    assert_eq!(report.summary.chapter_count, 3);
}

#[test]
fn test_extra_chapter_is_orphan_warning() {
    let temp = TempDir::new().unwrap();
    write_fundamentals_index(&temp);
    for (file, title) in [
        ("ch01.md", "Variables"),
        ("ch02.md", "Functions"),
        ("ch03.md", "Objects"),
        ("ch04.md", "Leftovers"),
    ] {
        write_chapter(&temp, file, title);
    }
    let book = load(&temp);

    let report = BookValidator::new(ValidationConfig::default())
        .validate(&book)
        .unwrap();
    assert!(report.summary.passed);
    assert_eq!(report.violations.len(), 1);
    let orphan = &report.violations[0];
    assert_eq!(orphan.id, "DOC002");
    assert_eq!(orphan.severity, Severity::Warning);
    assert_eq!(orphan.file.as_deref(), Some(temp.path().join("ch04.md").as_path()));

    let strict = BookValidator::new(ValidationConfig::default().with_strict(true))
        .validate(&book)
        .unwrap();
    assert!(!strict.summary.passed);
}

#[test]
fn test_missing_chapter_fails_with_dangling_reference() {
    let temp = TempDir::new().unwrap();
    write_file(
        &temp,
        "SUMMARY.md",
        "# Summary\n\n- [Variables](ch01.md)\n- [Later](ch99.md)\n",
    );
    write_chapter(&temp, "ch01.md", "Variables");
    let book = load(&temp);

    let err = book.resolve().unwrap_err();
    assert!(err.to_string().contains("ch99.md"));

    let report = BookValidator::new(ValidationConfig::default())
        .validate(&book)
        .unwrap();
    assert!(!report.summary.passed);
    assert_eq!(report.summary.error_count, 1);
    assert_eq!(report.violations[0].id, "DOC001");
    assert_eq!(report.violations[0].line, Some(4));
}

#[test]
fn test_nested_chapters_and_links() {
    let temp = TempDir::new().unwrap();
    write_file(
        &temp,
        "SUMMARY.md",
        "# Summary\n\n[Intro](intro.md)\n\n# Language\n\n- [Basics](js/basics.md)\n    - [Scope](js/scope.md)\n",
    );
    write_file(&temp, "intro.md", "# Intro\n\nStart with [basics](js/basics.md).\n");
    write_file(
        &temp,
        "js/basics.md",
        "# Basics\n\nThen read [scope](scope.md) and [closures](closures.md).\n",
    );
    write_chapter(&temp, "js/scope.md", "Scope");

    let report = BookValidator::new(ValidationConfig::default())
        .validate(&load(&temp))
        .unwrap();

    let ids: Vec<&str> = report.violations.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["DOC007"]);
    assert!(report.violations[0].message.contains("closures.md"));
}

#[test]
fn test_disabled_checks_are_silent() {
    let temp = TempDir::new().unwrap();
    write_file(&temp, "SUMMARY.md", "- [A](a.md)\n");
    write_file(&temp, "a.md", "no heading\n\n```\nraw\n```\n");
    write_file(&temp, "b.md", "# Unlisted\n");

    let config = ValidationConfig {
        orphan_chapters: false,
        snippet_dialects: false,
        chapter_titles: false,
        ..ValidationConfig::default()
    };
    let report = BookValidator::new(config.with_strict(true))
        .validate(&load(&temp))
        .unwrap();
    assert!(report.summary.passed);
    assert!(report.violations.is_empty());
}
