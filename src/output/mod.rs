mod json;
mod tree;

pub use json::JsonFormatter;
pub use tree::{ColorMode, TreeFormatter};

use crate::error::Result;
use crate::scanner::TreeNode;

/// Trait for rendering scanned nodes into an output document.
pub trait OutputFormatter {
    /// Format the node sequence into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, nodes: &[TreeNode]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
