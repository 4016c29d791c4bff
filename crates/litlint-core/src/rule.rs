//! Rule trait for defining lint rules.

use crate::context::FileContext;
use crate::types::{Severity, Violation};

/// A per-file lint rule based on `syn` AST analysis.
///
/// Implement this trait to create rules that analyze individual source files.
/// Rules receive the parsed AST and can use the visitor pattern to traverse it.
/// A rule is constructed once, before any file is analyzed; `check` is then
/// invoked once per file. Implementations must not carry per-file mutable
/// state (`check` may run concurrently across files), which the `Send + Sync`
/// bound enforces.
///
/// # Example
///
/// ```ignore
/// use litlint_core::{Rule, FileContext, Violation, Severity};
/// use syn::visit::Visit;
///
/// pub struct NoEmptyStrings;
///
/// impl Rule for NoEmptyStrings {
///     fn name(&self) -> &'static str { "no-empty-strings" }
///     fn code(&self) -> &'static str { "LL999" }
///
///     fn check(&self, ctx: &FileContext, ast: &syn::File) -> Vec<Violation> {
///         let mut visitor = EmptyStringVisitor::new(ctx);
///         visitor.visit_file(ast);
///         visitor.violations
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "string-regex").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "LL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single file and returns any violations found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `ast` - The parsed syntax tree of the file
    ///
    /// # Returns
    ///
    /// A vector of violations found in this file.
    fn check(&self, ctx: &FileContext, ast: &syn::File) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
