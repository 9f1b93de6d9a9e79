use super::Rule;
use super::report::{Diagnostic, RuleKind};
use super::source::SourceFile;

/// Flags headers whose raw text lacks the include-guard marker.
///
/// A pure substring test on the unstripped text: the marker is a
/// preprocessor line and may legitimately sit anywhere in the file.
pub struct GuardRule {
    marker: String,
}

impl GuardRule {
    #[must_use]
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }
}

impl Rule for GuardRule {
    fn kind(&self) -> RuleKind {
        RuleKind::GuardMissing
    }

    fn check(&self, source: &SourceFile) -> Option<Diagnostic> {
        if source.text().contains(&self.marker) {
            None
        } else {
            Some(Diagnostic::error(
                RuleKind::GuardMissing,
                format!("Error: {} missing.", self.marker),
            ))
        }
    }
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod tests;
