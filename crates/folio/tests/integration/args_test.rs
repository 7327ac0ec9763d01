//! Argument parsing and config overrides

use folio::AppConfig;
use folio::cli::{Cli, Command, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_check_defaults() {
    let cli = Cli::try_parse_from(["folio", "check"]).unwrap();
    assert_eq!(
        cli.command,
        Command::Check {
            format: OutputFormat::Human,
            strict: false
        }
    );
    assert!(cli.config.is_none());
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "folio", "check", "--format", "ci", "--strict", "--root", "notes", "--summary", "INDEX.md",
    ])
    .unwrap();

    let mut config = AppConfig::default();
    cli.apply_overrides(&mut config);
    assert_eq!(config.book.root, PathBuf::from("notes"));
    assert_eq!(config.book.summary, PathBuf::from("INDEX.md"));
    assert!(config.checks.strict);
}

#[test]
fn test_show_takes_id_and_raw() {
    let cli = Cli::try_parse_from(["folio", "show", "js/scope.md", "--raw"]).unwrap();
    assert_eq!(
        cli.command,
        Command::Show {
            id: "js/scope.md".to_string(),
            raw: true
        }
    );
}

#[test]
fn test_unknown_format_is_rejected() {
    assert!(Cli::try_parse_from(["folio", "check", "--format", "xml"]).is_err());
}

#[test]
fn test_overrides_leave_config_alone_without_flags() {
    let cli = Cli::try_parse_from(["folio", "toc"]).unwrap();
    let mut config = AppConfig::default();
    cli.apply_overrides(&mut config);
    assert_eq!(config, AppConfig::default());
}
