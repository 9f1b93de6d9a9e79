use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, HdrGuardError, Result};

#[must_use]
pub fn run_config(args: &ConfigArgs) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), format),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// # Errors
/// Returns an error if the file is missing, unparseable or semantically
/// inconsistent.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(HdrGuardError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;

    validate_config_semantics(&config)
}

/// # Errors
/// Returns an error describing the first semantic inconsistency found.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    if config.rules.extensions.is_empty() {
        return Err(HdrGuardError::Config(
            "rules.extensions must name at least one header suffix".to_string(),
        ));
    }

    for ext in &config.rules.extensions {
        if ext.starts_with('.') {
            return Err(HdrGuardError::Config(format!(
                "rules.extensions entries must not include the leading dot: {ext}"
            )));
        }
    }

    if config.rules.guard && config.rules.guard_marker.trim().is_empty() {
        return Err(HdrGuardError::Config(
            "rules.guard_marker cannot be empty while the guard rule is enabled".to_string(),
        ));
    }

    for pattern in &config.scanner.exclude {
        globset::Glob::new(pattern).map_err(|e| HdrGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }

    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: &str) -> i32 {
    match run_config_show_impl(config_path, format) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// # Errors
/// Returns an error if the config cannot be loaded or serialized.
pub fn run_config_show_impl(config_path: Option<&Path>, format: &str) -> Result<String> {
    let loader = FileConfigLoader::new();
    let config = config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        _ => Ok(format_config_text(&config)),
    }
}

#[must_use]
pub fn format_config_text(config: &Config) -> String {
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    output.push_str("[scanner]\n");
    let _ = writeln!(output, "  gitignore = {}", config.scanner.gitignore);
    if config.scanner.exclude.is_empty() {
        output.push_str("  exclude = []\n");
    } else {
        output.push_str("  exclude = [\n");
        for pattern in &config.scanner.exclude {
            let _ = writeln!(output, "    \"{pattern}\",");
        }
        output.push_str("  ]\n");
    }

    output.push_str("\n[rules]\n");
    let _ = writeln!(output, "  extensions = {:?}", config.rules.extensions);
    let _ = writeln!(output, "  guard_marker = \"{}\"", config.rules.guard_marker);
    let _ = writeln!(output, "  guard = {}", config.rules.guard);
    let _ = writeln!(output, "  access_order = {}", config.rules.access_order);
    let _ = writeln!(
        output,
        "  friend_placement = {}",
        config.rules.friend_placement
    );
    let _ = writeln!(output, "  strict = {}", config.rules.strict);

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
