use super::Rule;
use super::report::{Diagnostic, RuleKind};
use super::source::{SPECIFIER_RE, SourceFile};

/// Position of an access specifier in the canonical ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Stage {
    Private,
    Protected,
    Public,
}

fn stage(keyword: &str) -> Stage {
    match keyword {
        "private" => Stage::Private,
        "protected" => Stage::Protected,
        _ => Stage::Public,
    }
}

/// Enforces the canonical `private` / `protected` / `public` ordering over
/// the whole-word specifier occurrences of a file.
///
/// Specifiers may repeat in place but may never step back to an earlier
/// stage, and `protected` only makes sense between `private` and `public`,
/// so it requires an earlier `private`. A single diagnostic is produced no
/// matter how often the order is broken.
pub struct AccessOrderRule;

impl Rule for AccessOrderRule {
    fn kind(&self) -> RuleKind {
        RuleKind::OrderViolation
    }

    fn check(&self, source: &SourceFile) -> Option<Diagnostic> {
        let stages: Vec<Stage> = SPECIFIER_RE
            .find_iter(source.stripped())
            .map(|m| stage(m.as_str()))
            .collect();

        if sequence_is_canonical(&stages) {
            None
        } else {
            Some(Diagnostic::error(
                RuleKind::OrderViolation,
                "Error: Incorrect access specifier order.",
            ))
        }
    }
}

fn sequence_is_canonical(stages: &[Stage]) -> bool {
    let mut seen_private = false;
    let mut current = Stage::Private;
    for &next in stages {
        if next < current {
            return false;
        }
        if next == Stage::Protected && !seen_private {
            return false;
        }
        if next == Stage::Private {
            seen_private = true;
        }
        current = next;
    }
    true
}

#[cfg(test)]
#[path = "access_order_tests.rs"]
mod tests;
