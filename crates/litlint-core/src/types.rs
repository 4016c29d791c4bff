//! Core types for lint violations and results.

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source code location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path relative to the lint root.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset in file (for miette integration).
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a new location from span information.
    #[must_use]
    pub fn from_span(file: PathBuf, span: proc_macro2::Span) -> Self {
        let start = span.start();
        Self {
            file,
            line: start.line,
            column: start.column + 1,
            offset: 0,
            length: 0,
        }
    }

    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length for this location.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// A lint violation found during analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "LL001").
    pub code: String,
    /// Rule name (e.g., "string-regex").
    pub rule: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Certainty of this finding, from 0.0 to 1.0. Deterministic
    /// syntactic checks report 1.0.
    pub confidence: f64,
    /// Primary location of the violation.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
}

impl Violation {
    /// Creates a new violation with full confidence.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            confidence: 1.0,
            location,
            message: message.into(),
        }
    }

    /// Sets the confidence score for this violation.
    #[must_use]
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} {} at {}:{}:{}\n",
            self.code,
            self.rule,
            self.location.file.display(),
            self.location.line,
            self.location.column,
        );
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        output
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.code,
            self.message
        )
    }
}

/// Renders a [`Violation`] as a miette Diagnostic with a source snippet.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl ViolationDiagnostic {
    /// Pairs a violation with the contents of the file it points into.
    #[must_use]
    pub fn new(violation: &Violation, source: impl Into<String>) -> Self {
        Self {
            message: format!("[{}] {}", violation.code, violation.message),
            src: NamedSource::new(
                violation.location.file.display().to_string(),
                source.into(),
            ),
            span: SourceSpan::from((violation.location.offset, violation.location.length)),
            label_message: violation.rule.clone(),
        }
    }
}

/// Result of running lint analysis.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found.
    pub violations: Vec<Violation>,
    /// Number of files checked.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == Severity::Error)
    }

    /// Returns true if there are any warnings or errors.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity >= Severity::Warning)
    }

    /// Counts violations by severity.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let errors = self
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Error)
            .count();
        let warnings = self
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Warning)
            .count();
        let infos = self
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Info)
            .count();
        (errors, warnings, infos)
    }

    /// Adds violations from another result.
    pub fn extend(&mut self, other: Self) {
        self.violations.extend(other.violations);
        self.files_checked += other.files_checked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_violation(severity: Severity) -> Violation {
        Violation::new(
            "LL001",
            "string-regex",
            severity,
            Location::new(PathBuf::from("src/lib.rs"), 42, 10),
            "string literal doesn't match user defined regex /^[A-Z]/",
        )
    }

    #[test]
    fn violation_defaults_to_full_confidence() {
        let v = make_violation(Severity::Error);
        assert!((v.confidence - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn violation_format_includes_location() {
        let v = make_violation(Severity::Error);
        let formatted = v.format();
        assert!(formatted.contains("src/lib.rs:42:10"));
        assert!(formatted.contains("error:"));
    }

    #[test]
    fn violation_display_is_compact() {
        let v = make_violation(Severity::Warning);
        let display = format!("{v}");
        assert!(display.contains("warning [LL001]"));
    }

    #[test]
    fn violation_display_snapshot() {
        let v = make_violation(Severity::Error);
        insta::assert_snapshot!(
            v.to_string(),
            @"src/lib.rs:42:10: error [LL001] string literal doesn't match user defined regex /^[A-Z]/"
        );
    }

    #[test]
    fn diagnostic_carries_source_label_and_code() {
        use miette::Diagnostic as _;

        let source = "fn main() {\n    let _ = \"hello\";\n}\n";
        let mut v = make_violation(Severity::Error);
        v.location = v.location.with_span(24, 7);

        let diag = ViolationDiagnostic::new(&v, source);
        assert_eq!(
            diag.to_string(),
            format!("[LL001] {}", v.message)
        );
        assert!(diag.source_code().is_some());

        let labels: Vec<_> = diag.labels().map(Iterator::collect).unwrap_or_default();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 24);
        assert_eq!(labels[0].len(), 7);
        assert_eq!(labels[0].label(), Some("string-regex"));
    }

    #[test]
    fn has_errors_distinguishes_severity() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Warning));
        assert!(!result.has_errors());
        assert!(result.has_warnings());

        result.violations.push(make_violation(Severity::Error));
        assert!(result.has_errors());
    }

    #[test]
    fn count_by_severity_tallies_each_level() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Error));
        result.violations.push(make_violation(Severity::Error));
        result.violations.push(make_violation(Severity::Warning));
        result.violations.push(make_violation(Severity::Info));
        assert_eq!(result.count_by_severity(), (2, 1, 1));
    }

    #[test]
    fn location_from_span_is_one_indexed() {
        let span = proc_macro2::Span::call_site();
        let loc = Location::from_span(PathBuf::from("x.rs"), span);
        assert!(loc.column >= 1);
    }
}
