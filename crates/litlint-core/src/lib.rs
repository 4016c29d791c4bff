//! # litlint-core
//!
//! Core framework for string-literal linting based on `syn` AST analysis.
//!
//! This crate provides the foundational traits and types for building
//! literal linters. It includes:
//!
//! - [`Rule`] trait for per-file AST-based rules
//! - [`Analyzer`] for orchestrating lint execution
//! - [`Violation`] for representing lint findings
//! - [`Config`] for TOML-based rule configuration
//!
//! ## Example
//!
//! ```ignore
//! use litlint_core::{Analyzer, Rule, Severity};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod rule;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use rule::{Rule, RuleBox};
pub use types::{LintResult, Location, Severity, Violation, ViolationDiagnostic};
