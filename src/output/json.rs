use serde::Serialize;

use crate::checker::Diagnostic;
use crate::error::Result;
use crate::scanner::TreeNode;

use super::OutputFormatter;

#[derive(Serialize)]
struct JsonReport<'a> {
    entries: Vec<JsonEntry<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    path: String,
    diagnostics: &'a [Diagnostic],
}

#[derive(Serialize)]
struct JsonSummary {
    headers_checked: usize,
    flagged: usize,
    warnings: usize,
}

/// Machine-readable report: one entry per checked header (and per entry
/// that degraded to a warning), plus the same counts the text summary
/// shows.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, nodes: &[TreeNode]) -> Result<String> {
        let mut entries = Vec::new();
        let mut checked = 0usize;
        let mut flagged = 0usize;
        let mut warnings = 0usize;

        for node in nodes {
            if node.candidate {
                checked += 1;
            }
            let Some(report) = &node.report else {
                continue;
            };
            if report.has_errors() {
                flagged += 1;
            } else if report.has_warnings() {
                warnings += 1;
            }
            entries.push(JsonEntry {
                path: node.path.display().to_string(),
                diagnostics: &report.diagnostics,
            });
        }

        let report = JsonReport {
            entries,
            summary: JsonSummary {
                headers_checked: checked,
                flagged,
                warnings,
            },
        };

        let json = serde_json::to_string_pretty(&report)?;
        Ok(format!("{json}\n"))
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
