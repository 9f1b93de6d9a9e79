use std::sync::LazyLock;

use regex::Regex;

use super::Rule;
use super::report::{Diagnostic, RuleKind};
use super::source::{SPECIFIER_RE, SourceFile, class_bodies};

static FRIEND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bfriend\b").expect("Invalid regex"));

/// Flags class bodies in which a friend declaration follows an access
/// specifier.
///
/// Friend declarations are expected in the implicit default-access region
/// at the top of the body, before the first specifier. Matching works on
/// stripped text; look-alike tokens produced by macros remain an accepted
/// false-positive source.
pub struct FriendRule;

impl Rule for FriendRule {
    fn kind(&self) -> RuleKind {
        RuleKind::FriendMisplaced
    }

    fn check(&self, source: &SourceFile) -> Option<Diagnostic> {
        let flagged = class_bodies(source.stripped())
            .iter()
            .any(|body| body_misplaces_friend(body));

        flagged.then(|| {
            Diagnostic::error(
                RuleKind::FriendMisplaced,
                "Error: Misplaced friend declaration.",
            )
        })
    }
}

fn body_misplaces_friend(body: &str) -> bool {
    let Some(first_specifier) = SPECIFIER_RE.find(body) else {
        return false;
    };
    FRIEND_RE
        .find_iter(body)
        .any(|m| m.start() > first_specifier.start())
}

#[cfg(test)]
#[path = "friend_tests.rs"]
mod tests;
