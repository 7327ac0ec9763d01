//! Unit tests for chapter identifiers

use folio_domain::ChapterId;
use std::path::Path;

#[test]
fn test_link_spellings_share_one_id() {
    let plain = ChapterId::new("a.md").unwrap();
    assert_eq!(ChapterId::from_link("./a.md"), Some(plain.clone()));
    assert_eq!(ChapterId::from_link("a.md#intro"), Some(plain.clone()));
    assert_eq!(ChapterId::from_link("a.md?x"), Some(plain));
}

#[test]
fn test_escaping_root_is_rejected() {
    assert!(ChapterId::new("../x.md").is_err());
    assert_eq!(ChapterId::from_link("../x.md"), None);
}

#[test]
fn test_external_and_empty_links_are_not_chapters() {
    assert_eq!(ChapterId::from_link("https://react.dev/learn"), None);
    assert_eq!(ChapterId::from_link("mailto:me@example.com"), None);
    assert_eq!(ChapterId::from_link(""), None);
    assert_eq!(ChapterId::from_link("#state"), None);
}

#[test]
fn test_percent_encoded_spaces_are_decoded() {
    let id = ChapterId::from_link("react/use%20state.md").unwrap();
    assert_eq!(id.as_str(), "react/use state.md");
}

#[test]
fn test_resolve_link_is_relative_to_chapter_directory() {
    let id = ChapterId::new("react/hooks.md").unwrap();
    assert_eq!(
        id.resolve_link("context.md#provider").unwrap().as_str(),
        "react/context.md"
    );
    assert_eq!(
        id.resolve_link("../js/spread.md").unwrap().as_str(),
        "js/spread.md"
    );
    assert_eq!(id.resolve_link("/intro.md").unwrap().as_str(), "intro.md");
    assert_eq!(id.resolve_link("../../outside.md"), None);
}

#[test]
fn test_from_relative_path() {
    let id = ChapterId::from_relative_path(Path::new("react/forms.md")).unwrap();
    assert_eq!(id.as_str(), "react/forms.md");
    assert_eq!(id.parent(), Some("react"));
    assert_eq!(id.file_stem(), "forms");
}

#[test]
fn test_is_markdown() {
    assert!(ChapterId::new("a.md").unwrap().is_markdown());
    assert!(ChapterId::new("b.MARKDOWN").unwrap().is_markdown());
    assert!(!ChapterId::new("img/logo.png").unwrap().is_markdown());
}

#[test]
fn test_serializes_as_plain_string() {
    let id = ChapterId::new("./ch01.md").unwrap();
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"ch01.md\"");
}
