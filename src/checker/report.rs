use serde::Serialize;

/// Category of a single diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    GuardMissing,
    OrderViolation,
    FriendMisplaced,
    Unreadable,
}

/// Rule violations are errors; degraded I/O conditions are warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// One finding for one file. Diagnostics carry no location beyond the file
/// itself; the message text is fixed per rule.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub kind: RuleKind,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn error(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// The ordered diagnostics produced for one file. Empty means clean.
/// Built once by the engine and consumed as-is by the renderer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }

    /// Space-separated concatenation of all messages, in rule order.
    #[must_use]
    pub fn summary(&self) -> String {
        self.diagnostics
            .iter()
            .map(|d| d.message.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
