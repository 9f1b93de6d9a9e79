use std::path::PathBuf;

use super::*;

fn source(text: &str) -> SourceFile {
    SourceFile::new(PathBuf::from("test.hpp"), text.to_string())
}

fn default_engine() -> RuleEngine {
    RuleEngine::from_config(&RulesConfig::default())
}

#[test]
fn engine_enables_all_rules_by_default() {
    assert_eq!(default_engine().rule_count(), 3);
}

#[test]
fn engine_respects_rule_toggles() {
    let config = RulesConfig {
        guard: false,
        friend_placement: false,
        ..RulesConfig::default()
    };
    assert_eq!(RuleEngine::from_config(&config).rule_count(), 1);
}

#[test]
fn clean_header_produces_empty_report() {
    let report = default_engine().check(&source(
        "#pragma once\nclass Foo {\npublic:\n};\n",
    ));
    assert!(report.is_clean());
}

#[test]
fn protected_without_private_is_flagged_for_order() {
    let report = default_engine().check(&source("#pragma once\nprotected:\n"));
    assert!(report.has_errors());
    assert_eq!(report.diagnostics[0].kind, RuleKind::OrderViolation);
}

#[test]
fn diagnostics_concatenate_in_rule_order() {
    let report = default_engine().check(&source("public:\nprivate:\n"));
    assert_eq!(
        report.summary(),
        "Error: #pragma once missing. Error: Incorrect access specifier order."
    );
}

#[test]
fn all_three_rules_can_fire_on_one_file() {
    let text = "public:\nclass A {\nprivate:\nfriend class B;\n};\n";
    let report = default_engine().check(&source(text));
    assert_eq!(report.diagnostics.len(), 3);
    assert_eq!(report.diagnostics[0].kind, RuleKind::GuardMissing);
    assert_eq!(report.diagnostics[1].kind, RuleKind::OrderViolation);
    assert_eq!(report.diagnostics[2].kind, RuleKind::FriendMisplaced);
}

#[test]
fn disabled_rule_does_not_fire() {
    let config = RulesConfig {
        guard: false,
        ..RulesConfig::default()
    };
    let report = RuleEngine::from_config(&config).check(&source("class A {};\n"));
    assert!(report.is_clean());
}

#[test]
fn custom_guard_marker_flows_through_engine() {
    let config = RulesConfig {
        guard_marker: "#ifndef FOO_H".to_string(),
        ..RulesConfig::default()
    };
    let report = RuleEngine::from_config(&config).check(&source("#pragma once\n"));
    assert_eq!(report.summary(), "Error: #ifndef FOO_H missing.");
}
