use std::fs;
use std::path::{Path, PathBuf};

use crate::checker::{Diagnostic, FileReport, RuleEngine, RuleKind, SourceFile};
use crate::cli::{CheckArgs, Cli, ColorChoice};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::HdrGuardError;
use crate::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TreeFormatter,
};
use crate::scanner::{FileScanner, HeaderFilter, TreeNode, TreeScanner};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS, Result};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Full check pipeline: configure, scan, check, render, report.
///
/// # Errors
/// Returns an error for config problems, invalid roots or output I/O
/// failures; per-file read failures degrade to warnings instead.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);

    // 3. Build the entry filter
    let filter = HeaderFilter::new(config.rules.extensions.clone(), &config.scanner.exclude)?;

    // 4. Validate and normalize the roots to scan
    let roots = resolve_roots(&args.paths)?;

    // 5. Walk each root in argument order and check eligible headers
    let scanner = TreeScanner::with_gitignore(filter, config.scanner.gitignore);
    let engine = RuleEngine::from_config(&config.rules);
    let mut nodes = Vec::new();
    for root in &roots {
        let mut tree = scanner.scan(root)?;
        for node in &mut tree {
            if node.candidate {
                node.report = Some(check_header(&engine, &node.path));
            }
        }
        nodes.extend(tree);
    }

    // 6. Format output
    let output = format_output(args.format, &nodes, color_choice_to_mode(cli.color))?;

    // 7. Write output
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 8. Exit code reflects findings
    Ok(exit_code(&nodes, args.warn_only, config.rules.strict))
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(ref extensions) = args.ext {
        config.rules.extensions.clone_from(extensions);
    }
    if let Some(ref marker) = args.guard_marker {
        config.rules.guard_marker.clone_from(marker);
    }
    config.scanner.exclude.extend(args.exclude.iter().cloned());
    if args.gitignore {
        config.scanner.gitignore = true;
    }
    if args.strict {
        config.rules.strict = true;
    }
}

fn resolve_roots(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut roots = Vec::with_capacity(paths.len());
    for path in paths {
        if !path.is_dir() {
            return Err(HdrGuardError::Config(format!(
                "Not a directory: {}",
                path.display()
            )));
        }
        roots.push(dunce::canonicalize(path)?);
    }
    Ok(roots)
}

fn check_header(engine: &RuleEngine, path: &Path) -> FileReport {
    match SourceFile::read(path) {
        Ok(source) => engine.check(&source),
        Err(e) => {
            let mut report = FileReport::default();
            report.push(read_failure_diagnostic(&e));
            report
        }
    }
}

fn read_failure_diagnostic(error: &HdrGuardError) -> Diagnostic {
    let message = match error {
        HdrGuardError::FileRead { source, .. }
            if source.kind() == std::io::ErrorKind::InvalidData =>
        {
            "Warning: not valid UTF-8."
        }
        _ => "Warning: unreadable file.",
    };
    Diagnostic::warning(RuleKind::Unreadable, message)
}

fn format_output(format: OutputFormat, nodes: &[TreeNode], color_mode: ColorMode) -> Result<String> {
    match format {
        OutputFormat::Text => TreeFormatter::new(color_mode).format(nodes),
        OutputFormat::Json => JsonFormatter.format(nodes),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn exit_code(nodes: &[TreeNode], warn_only: bool, strict: bool) -> i32 {
    if warn_only {
        return EXIT_SUCCESS;
    }

    let has_failures = nodes
        .iter()
        .any(|n| n.report.as_ref().is_some_and(FileReport::has_errors));
    let has_warnings = nodes
        .iter()
        .any(|n| n.report.as_ref().is_some_and(FileReport::has_warnings));

    if has_failures || (strict && has_warnings) {
        EXIT_VIOLATIONS
    } else {
        EXIT_SUCCESS
    }
}

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
