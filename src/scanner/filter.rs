use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{HdrGuardError, Result};

/// Decides which walk entries are pruned and which files are checked.
pub trait EntryFilter {
    /// Entries matching an exclude pattern are pruned from the walk,
    /// subtree included.
    fn is_excluded(&self, path: &Path) -> bool;

    /// Files with a recognized header suffix are eligible for checking.
    fn is_candidate(&self, path: &Path) -> bool;
}

pub struct HeaderFilter {
    extensions: Vec<String>,
    exclude_patterns: GlobSet,
}

impl HeaderFilter {
    /// Create a new filter with the given header suffixes and exclude
    /// patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extensions: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| HdrGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| HdrGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            extensions,
            exclude_patterns,
        })
    }
}

impl EntryFilter for HeaderFilter {
    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }

    fn is_candidate(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
