use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, HdrGuardError, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot
/// be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(HdrGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    let template = generate_config_template();

    fs::write(output_path, template)?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r##"# hdr-guard configuration file

[scanner]
# Respect .gitignore rules when walking the tree (default: false)
gitignore = false

# Glob patterns pruned from the scan entirely
exclude = [
    "**/build/**",
    "**/third_party/**",
]

[rules]
# File suffixes treated as headers and checked
extensions = ["h", "hpp"]

# Include-guard marker every header must contain
guard_marker = "#pragma once"

# Individual rule toggles
guard = true
access_order = true
friend_placement = true

# Treat warnings (unreadable entries) as failures
# strict = true
"##
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
