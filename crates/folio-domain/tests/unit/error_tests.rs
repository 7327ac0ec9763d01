//! Unit tests for domain error types

use folio_domain::{ChapterId, Error};

#[test]
fn test_not_found_error() {
    let error = Error::not_found("ch99.md");
    match error {
        Error::NotFound { resource } => assert_eq!(resource, "ch99.md"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_dangling_reference_display() {
    let error = Error::dangling(vec![ChapterId::new("ch99.md").unwrap()]);
    assert!(error.to_string().contains("ch99.md"));
}

#[test]
fn test_parse_error_display() {
    let error = Error::parse("/notes/SUMMARY.md", "not UTF-8");
    assert_eq!(
        error.to_string(),
        "Parse error in /notes/SUMMARY.md: not UTF-8"
    );
}

#[test]
fn test_io_error_keeps_message_and_source() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error = Error::io_with_source("Failed to read chapter ch01.md", io);
    assert_eq!(error.to_string(), "I/O error: Failed to read chapter ch01.md");
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_config_error_keeps_source() {
    let io = std::io::Error::other("bad file");
    let error = Error::config_with_source("cannot read folio.toml", io);
    assert!(std::error::Error::source(&error).is_some());
}
