//! List rules command implementation.

use litlint_core::Rule;
use litlint_rules::StringRegex;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<20} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    let string_regex = StringRegex::new(Vec::new());
    println!(
        "{:<10} {:<20} {}",
        string_regex.code(),
        string_regex.name(),
        string_regex.description()
    );

    println!("\nConfigure rules in litlint.toml, e.g.:");
    println!("  [rules.string-regex]");
    println!("  args = [[\"/^[A-Z]/\", \"must start with a capital letter\"]]");
}
