//! Check command implementation.

use anyhow::{Context, Result};
use litlint_core::{Analyzer, Config};
use litlint_rules::StringRegex;
use std::path::Path;

use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    exclude: Vec<String>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(path, config_path)?;

    // Compile rule arguments up front: a malformed configuration fails the
    // whole run before any file is analyzed.
    let string_regex_args = config
        .rules
        .get(litlint_rules::string_regex::NAME)
        .map(|c| c.get_array("args"))
        .unwrap_or_default();
    let string_regex = StringRegex::from_args(&string_regex_args)
        .context("Invalid string-regex configuration")?;

    let mut builder = Analyzer::builder()
        .root(path)
        .config(config)
        .rule(string_regex);

    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, format, analyzer.root())?;

    // Exit with error code if there are errors
    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Loads configuration from an explicit path or `<root>/litlint.toml`.
fn load_config(root: &Path, config_path: Option<&Path>) -> Result<Config> {
    if let Some(p) = config_path {
        return Config::from_file(p)
            .with_context(|| format!("Failed to load config: {}", p.display()));
    }

    let default_path = root.join("litlint.toml");
    if default_path.exists() {
        tracing::info!("Using config: {}", default_path.display());
        return Config::from_file(&default_path)
            .with_context(|| format!("Failed to load config: {}", default_path.display()));
    }

    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_prefers_explicit_path() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let explicit = dir.path().join("custom.toml");
        std::fs::write(&explicit, "[rules.string-regex]\nenabled = false\n")
            .expect("write config");

        let config = load_config(dir.path(), Some(&explicit)).expect("load config");
        assert!(!config.is_rule_enabled("string-regex"));
    }

    #[test]
    fn load_config_finds_litlint_toml_in_root() {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(
            dir.path().join("litlint.toml"),
            "[analyzer]\nexclude = [\"**/gen/**\"]\n",
        )
        .expect("write config");

        let config = load_config(dir.path(), None).expect("load config");
        assert_eq!(config.analyzer.exclude, vec!["**/gen/**".to_string()]);
    }

    #[test]
    fn load_config_defaults_when_missing() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = load_config(dir.path(), None).expect("load config");
        assert!(config.rules.is_empty());
    }

    #[test]
    fn load_config_fails_on_bad_explicit_path() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let missing = dir.path().join("nope.toml");
        assert!(load_config(dir.path(), Some(&missing)).is_err());
    }
}
