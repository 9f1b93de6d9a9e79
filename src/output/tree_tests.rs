use std::path::PathBuf;

use crate::checker::{Diagnostic, RuleKind};
use crate::scanner::NodeKind;

use super::*;

fn dir_node(prefix: &str, name: &str) -> TreeNode {
    TreeNode {
        path: PathBuf::from(name),
        name: name.to_string(),
        kind: NodeKind::Directory,
        depth: 1,
        prefix: prefix.to_string(),
        candidate: false,
        report: None,
    }
}

fn file_node(prefix: &str, name: &str, report: Option<FileReport>) -> TreeNode {
    TreeNode {
        path: PathBuf::from(name),
        name: name.to_string(),
        kind: NodeKind::File,
        depth: 1,
        prefix: prefix.to_string(),
        candidate: report.is_some(),
        report,
    }
}

fn error_report(message: &str) -> FileReport {
    let mut report = FileReport::default();
    report.push(Diagnostic::error(RuleKind::GuardMissing, message));
    report
}

#[test]
fn directory_gets_trailing_slash() {
    let nodes = vec![dir_node("└── ", "inc")];
    let output = TreeFormatter::new(ColorMode::Never).format(&nodes).unwrap();
    assert!(output.starts_with("└── inc/\n"));
}

#[test]
fn clean_header_renders_without_diagnostics() {
    let nodes = vec![file_node("└── ", "Foo.hpp", Some(FileReport::default()))];
    let output = TreeFormatter::new(ColorMode::Never).format(&nodes).unwrap();
    assert!(output.starts_with("└── Foo.hpp\n"));
}

#[test]
fn flagged_header_appends_separator_and_summary() {
    let nodes = vec![file_node(
        "└── ",
        "Bar.hpp",
        Some(error_report("Error: #pragma once missing.")),
    )];
    let output = TreeFormatter::new(ColorMode::Never).format(&nodes).unwrap();
    assert!(output.starts_with("└── Bar.hpp - Error: #pragma once missing.\n"));
}

#[test]
fn unchecked_file_renders_plain() {
    let nodes = vec![file_node("├── ", "notes.txt", None)];
    let output = TreeFormatter::new(ColorMode::Never).format(&nodes).unwrap();
    assert!(output.starts_with("├── notes.txt\n"));
}

#[test]
fn summary_counts_checked_flagged_and_warnings() {
    let mut warning_report = FileReport::default();
    warning_report.push(Diagnostic::warning(
        RuleKind::Unreadable,
        "Warning: unreadable file.",
    ));

    let nodes = vec![
        file_node("├── ", "Clean.hpp", Some(FileReport::default())),
        file_node("├── ", "Bad.hpp", Some(error_report("Error: #pragma once missing."))),
        file_node("└── ", "Odd.hpp", Some(warning_report)),
    ];
    let output = TreeFormatter::new(ColorMode::Never).format(&nodes).unwrap();

    assert!(output.ends_with("Summary: 3 headers checked, 1 flagged, 1 warnings\n"));
}

#[test]
fn colors_wrap_diagnostics_when_enabled() {
    let nodes = vec![file_node(
        "└── ",
        "Bad.hpp",
        Some(error_report("Error: #pragma once missing.")),
    )];
    let output = TreeFormatter::new(ColorMode::Always).format(&nodes).unwrap();

    assert!(output.contains("\x1b[31m"));
    assert!(output.contains("\x1b[0m"));
}

#[test]
fn never_mode_emits_no_escape_codes() {
    let nodes = vec![file_node(
        "└── ",
        "Bad.hpp",
        Some(error_report("Error: #pragma once missing.")),
    )];
    let output = TreeFormatter::new(ColorMode::Never).format(&nodes).unwrap();

    assert!(!output.contains('\x1b'));
}

#[test]
fn empty_tree_still_prints_summary() {
    let output = TreeFormatter::new(ColorMode::Never).format(&[]).unwrap();
    assert_eq!(output, "\nSummary: 0 headers checked, 0 flagged, 0 warnings\n");
}
