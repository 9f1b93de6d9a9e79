use serde::{Deserialize, Serialize};

/// Scanner configuration for physical tree discovery.
///
/// Exclusion happens here so that pruned directories never appear in the
/// rendered tree at all; eligibility for checking is decided by
/// [`RulesConfig::extensions`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Respect .gitignore rules while walking (default: false).
    #[serde(default)]
    pub gitignore: bool,

    /// Glob patterns pruned from the walk entirely.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Rule configuration: which files count as headers and which conventions
/// are enforced on them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RulesConfig {
    /// File suffixes treated as headers and checked.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Include-guard marker every header must contain.
    #[serde(default = "default_guard_marker")]
    pub guard_marker: String,

    /// Enable the include-guard rule.
    #[serde(default = "default_true")]
    pub guard: bool,

    /// Enable the access-specifier ordering rule.
    #[serde(default = "default_true")]
    pub access_order: bool,

    /// Enable the friend-placement rule.
    #[serde(default = "default_true")]
    pub friend_placement: bool,

    /// Treat warnings (unreadable entries) as failures.
    #[serde(default)]
    pub strict: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            guard_marker: default_guard_marker(),
            guard: true,
            access_order: true,
            friend_placement: true,
            strict: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub rules: RulesConfig,
}

fn default_extensions() -> Vec<String> {
    vec!["h".to_string(), "hpp".to_string()]
}

fn default_guard_marker() -> String {
    "#pragma once".to_string()
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
