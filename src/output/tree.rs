use std::fmt::Write;

use crate::checker::FileReport;
use crate::error::Result;
use crate::scanner::TreeNode;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

/// Renders the node sequence as an annotated ASCII tree: one line per
/// entry, `/` appended to directories, diagnostics appended to flagged
/// header lines, and a trailing summary.
pub struct TreeFormatter {
    use_colors: bool,
}

impl TreeFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, report: &FileReport) -> String {
        if !self.use_colors {
            return text.to_string();
        }

        let color = if report.has_errors() {
            ansi::RED
        } else {
            ansi::YELLOW
        };
        format!("{color}{text}{}", ansi::RESET)
    }
}

impl Default for TreeFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TreeFormatter {
    fn format(&self, nodes: &[TreeNode]) -> Result<String> {
        let mut output = String::new();
        let mut checked = 0usize;
        let mut flagged = 0usize;
        let mut warnings = 0usize;

        for node in nodes {
            let _ = write!(output, "{}{}", node.prefix, node.name);
            if node.is_dir() {
                output.push('/');
            }
            if node.candidate {
                checked += 1;
            }
            if let Some(report) = &node.report
                && !report.is_clean()
            {
                if report.has_errors() {
                    flagged += 1;
                } else {
                    warnings += 1;
                }
                let _ = write!(output, " - {}", self.colorize(&report.summary(), report));
            }
            output.push('\n');
        }

        let _ = writeln!(
            output,
            "\nSummary: {checked} headers checked, {flagged} flagged, {warnings} warnings"
        );

        Ok(output)
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
