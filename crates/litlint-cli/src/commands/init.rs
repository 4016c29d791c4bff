//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# litlint configuration

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./src"

# Glob patterns to exclude from analysis
exclude = [
    "**/target/**",
    "**/vendor/**",
]

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.string-regex]
enabled = true
# severity = "warning"  # Override default severity
# Each argument is a /-delimited regex with an optional custom message.
args = [
    ["/^[A-Z]/", "must start with a capital letter"],
    ["/[^.]$/"],
]
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("litlint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created litlint.toml");
    println!("\nNext steps:");
    println!("  1. Edit litlint.toml to configure patterns");
    println!("  2. Run: litlint check");

    Ok(())
}
