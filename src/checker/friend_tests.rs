use std::path::PathBuf;

use super::*;

fn check(text: &str) -> Option<Diagnostic> {
    FriendRule.check(&SourceFile::new(PathBuf::from("test.hpp"), text.to_string()))
}

#[test]
fn friend_after_specifier_is_flagged() {
    let text = "class A {\nprivate:\nfriend class B;\n};\n";
    let diagnostic = check(text).unwrap();
    assert_eq!(diagnostic.message, "Error: Misplaced friend declaration.");
    assert_eq!(diagnostic.kind, RuleKind::FriendMisplaced);
}

#[test]
fn friend_before_any_specifier_is_clean() {
    let text = "class A {\nfriend class B;\nprivate:\nint x;\n};\n";
    assert!(check(text).is_none());
}

#[test]
fn friend_without_specifiers_is_clean() {
    assert!(check("class A {\nfriend class B;\n};\n").is_none());
}

#[test]
fn specifier_without_friend_is_clean() {
    assert!(check("class A {\nprivate:\nint x;\n};\n").is_none());
}

#[test]
fn friend_outside_class_body_is_ignored() {
    let text = "private:\nfriend class B;\n";
    assert!(check(text).is_none());
}

#[test]
fn friend_in_comment_is_ignored() {
    let text = "class A {\nprivate:\n// friend class B;\nint x;\n};\n";
    assert!(check(text).is_none());
}

#[test]
fn flagged_nested_class_is_detected() {
    let text = "class Outer {\nclass Inner {\npublic:\nfriend class B;\n};\n};\n";
    assert!(check(text).is_some());
}

#[test]
fn one_diagnostic_for_multiple_flagged_classes() {
    let text = "class A {\nprivate:\nfriend class X;\n};\nclass B {\npublic:\nfriend class Y;\n};\n";
    let diagnostic = check(text).unwrap();
    assert_eq!(diagnostic.kind, RuleKind::FriendMisplaced);
}

#[test]
fn specifier_only_after_friend_in_second_class_is_clean() {
    let text = "class A {\nfriend class X;\n};\nclass B {\nprivate:\nint x;\n};\n";
    assert!(check(text).is_none());
}
