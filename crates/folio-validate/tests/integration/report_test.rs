//! Report rendering for a loaded notebook

use crate::test_utils::{load, write_chapter, write_file};
use folio_validate::{BookValidator, Reporter, ValidationConfig, ValidationReport};
use tempfile::TempDir;

fn broken_notebook(temp: &TempDir) -> ValidationReport {
    write_file(
        temp,
        "SUMMARY.md",
        "# Summary\n\n# Basics\n\n- [A](a.md)\n- [Missing](missing.md)\n\n# Planned\n",
    );
    write_chapter(temp, "a.md", "A");
    write_file(temp, "orphan.md", "# Orphan\n\n```\nuntagged\n```\n");

    BookValidator::new(ValidationConfig::default())
        .validate(&load(temp))
        .unwrap()
}

#[test]
fn test_report_counts() {
    let temp = TempDir::new().unwrap();
    let report = broken_notebook(&temp);

    // DOC001 + DOC004 errors, DOC002 + DOC003 warnings
    assert_eq!(Reporter::count_errors(&report), 2);
    assert_eq!(Reporter::count_warnings(&report), 2);
    assert_eq!(report.summary.by_id.len(), 4);
    assert!(!report.summary.passed);
}

#[test]
fn test_violations_sorted_by_location() {
    let temp = TempDir::new().unwrap();
    let report = broken_notebook(&temp);

    let locations: Vec<_> = report
        .violations
        .iter()
        .map(|v| (v.file.clone(), v.line))
        .collect();
    let mut sorted = locations.clone();
    sorted.sort();
    assert_eq!(locations, sorted);
}

#[test]
fn test_human_report_groups_by_category() {
    let temp = TempDir::new().unwrap();
    let output = Reporter::to_human_readable(&broken_notebook(&temp));

    assert!(output.contains("Status: FAILED"));
    assert!(output.contains("--- Index Violations ---"));
    assert!(output.contains("--- Content Violations ---"));
    assert!(!output.contains("--- Links Violations ---"));
    assert!(output.contains("SUMMARY.md:6"));
}

#[test]
fn test_json_report_parses_back() {
    let temp = TempDir::new().unwrap();
    let report = broken_notebook(&temp);
    let json = Reporter::to_json(&report).unwrap();

    let parsed: ValidationReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.summary.total_violations, report.summary.total_violations);
    assert_eq!(parsed.violations, report.violations);
}

#[test]
fn test_ci_summary_annotates_errors_and_warnings() {
    let temp = TempDir::new().unwrap();
    let output = Reporter::to_ci_summary(&broken_notebook(&temp));

    assert!(output.contains(":x: FAILED"));
    assert!(output.contains("| DOC001 | 1 |"));
    assert_eq!(output.matches("::error ").count(), 2);
    assert_eq!(output.matches("::warning ").count(), 2);
}
