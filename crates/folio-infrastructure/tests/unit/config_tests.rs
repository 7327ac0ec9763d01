//! Tests for configuration loading

use folio_infrastructure::{AppConfig, ConfigLoader};
use std::path::PathBuf;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.book.summary, PathBuf::from("SUMMARY.md"));
    assert!(config.checks.orphan_chapters);
    assert!(!config.checks.strict);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_file_then_env_precedence() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "folio.toml",
            r#"
[book]
root = "notes"
summary = "SUMMARY-v2.md"

[checks]
strict = false
known_dialects = ["js", "jsx"]
"#,
        )?;
        jail.set_env("FOLIO_CHECKS__STRICT", "true");

        let config = ConfigLoader::new()
            .with_config_path("folio.toml")
            .load()
            .unwrap();
        assert_eq!(config.book.root, PathBuf::from("notes"));
        assert_eq!(config.book.summary, PathBuf::from("SUMMARY-v2.md"));
        assert!(config.checks.strict);
        assert_eq!(config.checks.known_dialects, vec!["js", "jsx"]);
        assert!(config.checks.cross_links);
        Ok(())
    });
}

#[test]
fn test_default_file_is_discovered() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("folio.toml", "[logging]\nlevel = \"debug\"\n")?;
        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn test_explicit_missing_file_is_error() {
    figment::Jail::expect_with(|_jail| {
        let err = ConfigLoader::new()
            .with_config_path("absent.toml")
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
        Ok(())
    });
}

#[test]
fn test_invalid_log_level_is_rejected() {
    figment::Jail::expect_with(|jail| {
        jail.set_env("FOLIO_LOGGING__LEVEL", "chatty");
        assert!(ConfigLoader::new().load().is_err());
        Ok(())
    });
}

#[test]
fn test_round_trip_through_toml() {
    let rendered = ConfigLoader::to_toml(&AppConfig::default()).unwrap();
    assert!(rendered.contains("[book]"));
    assert!(rendered.contains("summary = \"SUMMARY.md\""));
}
