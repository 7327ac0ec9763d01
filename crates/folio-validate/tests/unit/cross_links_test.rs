//! Tests for prose link checks (DOC007)

use crate::test_utils::{book, ids};
use folio_validate::{BookViolation, CrossLinkValidator, ValidationConfig, Validator};

#[test]
fn test_link_to_missing_chapter_is_reported() {
    let book = book(
        "- [A](a.md)\n- [B](b.md)\n",
        &[
            ("a.md", "# A\n\nSee [B](b.md) and [later](ch99.md#intro).\n"),
            ("b.md", "# B\n"),
        ],
    );

    let violations = CrossLinkValidator
        .validate(&book, &ValidationConfig::default())
        .unwrap();
    assert_eq!(ids(&violations), vec!["DOC007"]);
    assert!(matches!(
        &violations[0],
        BookViolation::BrokenCrossLink { target, line: 3, .. } if target == "ch99.md#intro"
    ));
}

#[test]
fn test_relative_links_resolve_from_chapter_directory() {
    let book = book(
        "- [A](part1/a.md)\n- [B](part2/b.md)\n",
        &[
            ("part1/a.md", "# A\n\nNext: [B](../part2/b.md)\n"),
            ("part2/b.md", "# B\n\nBack: [A](/part1/a.md)\n"),
        ],
    );

    let violations = CrossLinkValidator
        .validate(&book, &ValidationConfig::default())
        .unwrap();
    assert!(violations.is_empty(), "unexpected: {violations:?}");
}

#[test]
fn test_external_links_are_ignored() {
    let book = book(
        "- [A](a.md)\n",
        &[(
            "a.md",
            "# A\n\n[docs](https://example.com/x.md) [mail](mailto:me@example.com) [top](#a)\n",
        )],
    );

    let violations = CrossLinkValidator
        .validate(&book, &ValidationConfig::default())
        .unwrap();
    assert!(violations.is_empty());
}
