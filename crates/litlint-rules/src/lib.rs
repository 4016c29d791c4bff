//! # litlint-rules
//!
//! Built-in lint rules for litlint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | LL001 | `string-regex` | Requires string literals to match user-supplied regular expressions |
//!
//! ## Usage
//!
//! ```ignore
//! use litlint_core::Analyzer;
//! use litlint_rules::StringRegex;
//!
//! let rule = StringRegex::from_args(&args)?;
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(rule)
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod string_regex;

pub use string_regex::{ArgumentError, MatchRule, StringRegex};

/// Re-export core types for convenience.
pub use litlint_core::{Rule, Severity, Violation};
