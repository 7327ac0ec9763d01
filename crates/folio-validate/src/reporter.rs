//! Validation Report Generation
//!
//! Generates reports in multiple formats:
//! - JSON for CI integration
//! - Human-readable for terminal output
//! - CI summary for GitHub Actions annotations

use crate::violation_trait::{Severity, Violation, ViolationCategory};
use folio_domain::Book;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// One violation, flattened for reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationEntry {
    /// Violation ID (e.g. "DOC001")
    pub id: String,
    /// Report grouping
    pub category: ViolationCategory,
    /// Severity level
    pub severity: Severity,
    /// File the violation points at
    pub file: Option<PathBuf>,
    /// 1-based line in `file`
    pub line: Option<usize>,
    /// Human-readable message
    pub message: String,
    /// Suggested fix
    pub suggestion: Option<String>,
}

impl ViolationEntry {
    /// Flatten any violation
    pub fn from_violation(v: &dyn Violation) -> Self {
        Self {
            id: v.id().to_string(),
            category: v.category(),
            severity: v.severity(),
            file: v.file().cloned(),
            line: v.line(),
            message: v.message(),
            suggestion: v.suggestion(),
        }
    }

    /// `file:line` relative to `root` where possible
    pub fn location(&self, root: &Path) -> String {
        let Some(file) = &self.file else {
            return String::new();
        };
        let shown = file.strip_prefix(root).unwrap_or(file);
        match self.line {
            Some(line) => format!("{}:{line}", shown.display()),
            None => shown.display().to_string(),
        }
    }
}

/// Summary of validation results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Total number of violations
    pub total_violations: usize,
    /// Number of error-level violations
    pub error_count: usize,
    /// Number of warning-level violations
    pub warning_count: usize,
    /// Number of info-level violations
    pub info_count: usize,
    /// Count per violation ID
    pub by_id: BTreeMap<String, usize>,
    /// Chapters in the store
    pub chapter_count: usize,
    /// Parts declared by the index
    pub part_count: usize,
    /// Whether warnings fail the run
    pub strict: bool,
    /// Whether validation passed
    pub passed: bool,
}

/// Validation report containing all violations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Timestamp of the validation run
    pub timestamp: String,
    /// Book root path
    pub book_root: PathBuf,
    /// Index file path
    pub summary_file: PathBuf,
    /// Summary statistics
    pub summary: ValidationSummary,
    /// Violations sorted by file, then line
    pub violations: Vec<ViolationEntry>,
}

impl ValidationReport {
    /// Build a report for `book` from raw violations
    pub fn new<V: Violation>(book: &Book, violations: &[V], strict: bool) -> Self {
        let mut entries: Vec<ViolationEntry> = violations
            .iter()
            .map(|v| ViolationEntry::from_violation(v))
            .collect();
        entries.sort_by(|a, b| {
            a.file
                .cmp(&b.file)
                .then(a.line.cmp(&b.line))
                .then(a.id.cmp(&b.id))
        });

        let count = |severity: Severity| {
            entries
                .iter()
                .filter(|e| e.severity == severity)
                .count()
        };
        let error_count = count(Severity::Error);
        let warning_count = count(Severity::Warning);
        let info_count = count(Severity::Info);

        let mut by_id = BTreeMap::new();
        for entry in &entries {
            *by_id.entry(entry.id.clone()).or_insert(0) += 1;
        }

        let summary = ValidationSummary {
            total_violations: entries.len(),
            error_count,
            warning_count,
            info_count,
            by_id,
            chapter_count: book.store().len(),
            part_count: book.summary().parts.len(),
            strict,
            passed: error_count == 0 && (!strict || warning_count == 0),
        };

        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            book_root: book.root().to_path_buf(),
            summary_file: book.summary_path().to_path_buf(),
            summary,
            violations: entries,
        }
    }

    /// Violations of one category
    pub fn in_category(
        &self,
        category: ViolationCategory,
    ) -> impl Iterator<Item = &ViolationEntry> {
        self.violations
            .iter()
            .filter(move |v| v.category == category)
    }
}

/// Report generator
pub struct Reporter;

impl Reporter {
    /// Generate JSON report
    pub fn to_json(report: &ValidationReport) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    /// Generate human-readable report
    pub fn to_human_readable(report: &ValidationReport) -> String {
        let mut output = String::new();
        let s = &report.summary;

        output.push_str("=== Notebook Validation Report ===\n\n");
        let _ = writeln!(output, "Timestamp: {}", report.timestamp);
        let _ = writeln!(output, "Book:      {}", report.book_root.display());
        let _ = writeln!(output, "Index:     {}", report.summary_file.display());
        let _ = writeln!(
            output,
            "Chapters:  {} in {} part(s)\n",
            s.chapter_count, s.part_count
        );

        output.push_str("--- Summary ---\n");
        let _ = writeln!(output, "Total Violations: {}", s.total_violations);
        let _ = writeln!(output, "  Errors:   {}", s.error_count);
        let _ = writeln!(output, "  Warnings: {}", s.warning_count);
        let _ = writeln!(output, "  Info:     {}", s.info_count);
        output.push('\n');

        let status = if s.passed { "PASSED" } else { "FAILED" };
        let mode = if s.strict { " (strict)" } else { "" };
        let _ = writeln!(output, "Status: {status}{mode}\n");

        for category in [
            ViolationCategory::Index,
            ViolationCategory::Content,
            ViolationCategory::Links,
        ] {
            let mut entries = report.in_category(category).peekable();
            if entries.peek().is_none() {
                continue;
            }
            let _ = writeln!(output, "--- {category} Violations ---");
            for v in entries {
                let _ = writeln!(
                    output,
                    "  [{}] {} {} {}",
                    v.severity,
                    v.id,
                    v.location(&report.book_root),
                    v.message
                );
                if let Some(suggestion) = &v.suggestion {
                    let _ = writeln!(output, "      -> {suggestion}");
                }
            }
            output.push('\n');
        }

        output
    }

    /// Generate CI summary (GitHub Actions format)
    pub fn to_ci_summary(report: &ValidationReport) -> String {
        let mut output = String::new();
        let s = &report.summary;

        output.push_str("## Notebook Validation\n\n");

        if s.passed {
            output.push_str("**Status:** :white_check_mark: PASSED\n\n");
        } else {
            output.push_str("**Status:** :x: FAILED\n\n");
        }

        output.push_str("| Check | Count |\n");
        output.push_str("|-------|-------|\n");
        for (id, count) in &s.by_id {
            let _ = writeln!(output, "| {id} | {count} |");
        }
        let _ = writeln!(output, "| **Total** | **{}** |", s.total_violations);
        output.push('\n');

        let annotations: Vec<String> = report
            .violations
            .iter()
            .filter_map(|v| {
                let level = match v.severity {
                    Severity::Error => "error",
                    Severity::Warning => "warning",
                    Severity::Info => return None,
                };
                let mut props = Vec::new();
                if let Some(file) = &v.file {
                    props.push(format!("file={}", escape_property(&file.display().to_string())));
                }
                if let Some(line) = v.line {
                    props.push(format!("line={line}"));
                }
                let message = escape_data(&format!("{} {}", v.id, v.message));
                Some(format!("::{level} {}::{message}", props.join(",")))
            })
            .collect();

        if !annotations.is_empty() {
            output.push_str("\n### Annotations\n\n");
            for a in annotations {
                output.push_str(&a);
                output.push('\n');
            }
        }

        output
    }

    /// Count error-level violations
    pub fn count_errors(report: &ValidationReport) -> usize {
        report
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Error)
            .count()
    }

    /// Count warning-level violations
    pub fn count_warnings(report: &ValidationReport) -> usize {
        report
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Warning)
            .count()
    }
}

/// Escape a GitHub workflow command message
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a GitHub workflow command property value
fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
