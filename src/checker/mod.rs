mod access_order;
mod friend;
mod guard;
mod report;
mod source;

pub use access_order::AccessOrderRule;
pub use friend::FriendRule;
pub use guard::GuardRule;
pub use report::{Diagnostic, FileReport, RuleKind, Severity};
pub use source::{SourceFile, class_bodies, strip_comments_and_strings};

use crate::config::RulesConfig;

/// A single stateless convention check over one header's text.
pub trait Rule {
    /// The diagnostic category this rule produces.
    fn kind(&self) -> RuleKind;

    /// Inspect a file and return at most one diagnostic.
    fn check(&self, source: &SourceFile) -> Option<Diagnostic>;
}

/// Runs the enabled rules in a fixed order and collects their output into
/// a per-file report. Rules share no state across files or each other.
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    #[must_use]
    pub fn from_config(config: &RulesConfig) -> Self {
        let mut rules: Vec<Box<dyn Rule>> = Vec::new();
        if config.guard {
            rules.push(Box::new(GuardRule::new(config.guard_marker.clone())));
        }
        if config.access_order {
            rules.push(Box::new(AccessOrderRule));
        }
        if config.friend_placement {
            rules.push(Box::new(FriendRule));
        }
        Self { rules }
    }

    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn check(&self, source: &SourceFile) -> FileReport {
        let mut report = FileReport::default();
        for rule in &self.rules {
            if let Some(diagnostic) = rule.check(source) {
                report.push(diagnostic);
            }
        }
        report
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
