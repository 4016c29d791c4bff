//! Rule that checks string literals against user-supplied regular expressions.
//!
//! Every string literal in a file must match all configured patterns.
//! Each pattern that a literal fails to match produces one violation, so a
//! single literal can be flagged several times.
//!
//! # Configuration
//!
//! Arguments are lists of 1-2 strings: a `/`-delimited regex and an
//! optional custom message used in place of the pattern in diagnostics.
//!
//! ```toml
//! [rules.string-regex]
//! args = [
//!     ["/^[A-Z]/", "must start with a capital letter"],
//!     ["/[^.]$/"],
//! ]
//! ```
//!
//! Malformed arguments are rejected when the rule is constructed, before
//! any file is analyzed.

use litlint_core::{FileContext, Location, Rule, Severity, Violation};
use regex::Regex;
use syn::visit::Visit;
use syn::LitStr;
use tracing::debug;

/// Rule code for string-regex.
pub const CODE: &str = "LL001";

/// Rule name for string-regex.
pub const NAME: &str = "string-regex";

/// Errors raised while compiling string-regex arguments.
///
/// These are fatal configuration errors: the rule refuses to construct,
/// and the host must surface the error before analyzing any file.
#[derive(Debug, thiserror::Error)]
pub enum ArgumentError {
    /// The argument is not a list.
    #[error("string-regex: argument {index} must be a list of strings")]
    NotAList {
        /// Index of the offending argument.
        index: usize,
    },

    /// An element of the argument list is not a string.
    #[error("string-regex: argument {index}, element {element} must be a string")]
    NotAString {
        /// Index of the offending argument.
        index: usize,
        /// Index of the offending element within the argument.
        element: usize,
    },

    /// The argument list has the wrong number of elements.
    #[error("string-regex: argument {index} must have 1 or 2 elements, got {len}")]
    WrongArity {
        /// Index of the offending argument.
        index: usize,
        /// Number of elements found.
        len: usize,
    },

    /// The pattern is not bracketed by `/` delimiters.
    #[error("string-regex: argument {index}: pattern `{pattern}` must be bracketed by `/` delimiters")]
    MissingDelimiters {
        /// Index of the offending argument.
        index: usize,
        /// The pattern as supplied.
        pattern: String,
    },

    /// The pattern body is not a valid regular expression.
    #[error("string-regex: argument {index}: unable to compile `{pattern}` as a regex: {source}")]
    InvalidRegex {
        /// Index of the offending argument.
        index: usize,
        /// The pattern as supplied (delimiters included).
        pattern: String,
        /// The underlying regex error.
        source: regex::Error,
    },
}

/// A compiled matcher: a regular expression plus an optional custom
/// diagnostic message. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct MatchRule {
    pattern: Regex,
    error_message: Option<String>,
}

impl MatchRule {
    /// Creates a matcher that reports the pattern source in diagnostics.
    #[must_use]
    pub fn new(pattern: Regex) -> Self {
        Self {
            pattern,
            error_message: None,
        }
    }

    /// Sets a custom diagnostic message, reported instead of the pattern.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Unanchored "contains a match" test against the literal body.
    fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    fn failure_message(&self) -> String {
        match &self.error_message {
            Some(msg) => format!("string literal doesn't match user defined regex ({msg})"),
            None => format!(
                "string literal doesn't match user defined regex /{}/",
                self.pattern.as_str()
            ),
        }
    }
}

/// Checks every string literal against a set of user-supplied regexes.
///
/// The matcher set is fixed at construction and applied in configured
/// order to each literal; matchers are independent and never short-circuit.
#[derive(Debug, Clone)]
pub struct StringRegex {
    rules: Vec<MatchRule>,
    severity: Severity,
}

impl StringRegex {
    /// Creates the rule from already-compiled matchers.
    #[must_use]
    pub fn new(rules: Vec<MatchRule>) -> Self {
        Self {
            rules,
            severity: Severity::Error,
        }
    }

    /// Compiles the rule from raw configuration arguments.
    ///
    /// Each argument must be a list of 1-2 strings: a `/`-delimited regex
    /// and an optional custom message. Matcher order follows argument order.
    ///
    /// # Errors
    ///
    /// Returns an [`ArgumentError`] naming the offending argument (and
    /// element, for shape errors) if any argument is malformed or its
    /// pattern fails to compile.
    pub fn from_args(args: &[toml::Value]) -> Result<Self, ArgumentError> {
        let rules = args
            .iter()
            .enumerate()
            .map(|(index, arg)| parse_argument(arg, index))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("string-regex: compiled {} matcher(s)", rules.len());
        Ok(Self::new(rules))
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for StringRegex {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires string literals to match user-supplied regular expressions"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, ast: &syn::File) -> Vec<Violation> {
        if self.rules.is_empty() {
            return Vec::new();
        }

        let mut visitor = LiteralVisitor {
            ctx,
            rule: self,
            violations: Vec::new(),
        };

        visitor.visit_file(ast);
        visitor.violations
    }
}

/// Parses one raw argument into a compiled matcher.
fn parse_argument(arg: &toml::Value, index: usize) -> Result<MatchRule, ArgumentError> {
    let list = arg.as_array().ok_or(ArgumentError::NotAList { index })?;

    let mut parts = Vec::with_capacity(list.len());
    for (element, value) in list.iter().enumerate() {
        let s = value
            .as_str()
            .ok_or(ArgumentError::NotAString { index, element })?;
        parts.push(s);
    }

    if parts.is_empty() || parts.len() > 2 {
        return Err(ArgumentError::WrongArity {
            index,
            len: parts.len(),
        });
    }

    let pattern = compile_pattern(parts[0], index)?;
    let rule = MatchRule::new(pattern);

    Ok(match parts.get(1) {
        Some(message) => rule.with_message(*message),
        None => rule,
    })
}

/// Strips the `/` delimiters and compiles the body.
///
/// The delimiters are required to be literal `/` characters; the original
/// implementation dropped the first and last character unchecked.
fn compile_pattern(raw: &str, index: usize) -> Result<Regex, ArgumentError> {
    let body = raw
        .strip_prefix('/')
        .and_then(|rest| rest.strip_suffix('/'))
        .ok_or_else(|| ArgumentError::MissingDelimiters {
            index,
            pattern: raw.to_string(),
        })?;

    Regex::new(body).map_err(|source| ArgumentError::InvalidRegex {
        index,
        pattern: raw.to_string(),
        source,
    })
}

/// Extracts the quoted body from a literal's raw token text.
///
/// Everything between the first and last `"` is returned as written:
/// escape sequences are not interpreted, and raw-string guards (`r`,
/// `#`) fall outside the quotes and are never part of the body.
fn literal_body(raw: &str) -> Option<&str> {
    let open = raw.find('"')?;
    let close = raw.rfind('"')?;
    raw.get(open + 1..close)
}

struct LiteralVisitor<'a> {
    ctx: &'a FileContext<'a>,
    rule: &'a StringRegex,
    violations: Vec<Violation>,
}

impl LiteralVisitor<'_> {
    fn check_literal(&mut self, body: &str, token_len: usize, span: proc_macro2::Span) {
        for rule in &self.rule.rules {
            if rule.matches(body) {
                continue;
            }

            let start = span.start();
            let line = start.line;
            let column = start.column + 1;
            let location = Location::new(self.ctx.relative_path.clone(), line, column)
                .with_span(self.ctx.offset_for(line, column), token_len);

            self.violations.push(Violation::new(
                CODE,
                NAME,
                self.rule.severity,
                location,
                rule.failure_message(),
            ));
        }
    }
}

impl<'ast> Visit<'ast> for LiteralVisitor<'_> {
    fn visit_lit_str(&mut self, node: &'ast LitStr) {
        // Match against the raw quoted body, not the cooked value: escape
        // sequences stay as written in source.
        let token = node.token().to_string();
        if let Some(body) = literal_body(&token) {
            self.check_literal(body, token.len(), node.span());
        }

        syn::visit::visit_lit_str(self, node);
    }
}
