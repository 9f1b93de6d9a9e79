use tempfile::TempDir;

use crate::cli::InitArgs;
use crate::config::Config;

use super::*;

#[test]
fn init_writes_parseable_template() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join(".hdr-guard.toml");
    let args = InitArgs {
        output: output.clone(),
        force: false,
    };

    run_init_impl(&args).unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    let config: Config = toml::from_str(&content).unwrap();
    assert_eq!(config.rules.extensions, vec!["h", "hpp"]);
    assert_eq!(config.rules.guard_marker, "#pragma once");
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join(".hdr-guard.toml");
    std::fs::write(&output, "existing").unwrap();

    let args = InitArgs {
        output: output.clone(),
        force: false,
    };
    assert!(run_init_impl(&args).is_err());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "existing");
}

#[test]
fn init_overwrites_with_force() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join(".hdr-guard.toml");
    std::fs::write(&output, "existing").unwrap();

    let args = InitArgs {
        output: output.clone(),
        force: true,
    };
    run_init_impl(&args).unwrap();

    assert!(std::fs::read_to_string(&output).unwrap().contains("[rules]"));
}

#[test]
fn template_keeps_strict_commented_out() {
    let template = generate_config_template();
    let config: Config = toml::from_str(&template).unwrap();
    assert!(!config.rules.strict);
}
