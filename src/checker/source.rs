use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{HdrGuardError, Result};

/// Whole-word access-specifier keywords, matched over stripped text.
pub(crate) static SPECIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(private|protected|public)\b").expect("Invalid regex"));

static CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bclass\b").expect("Invalid regex"));

/// One header's content, read once and immutable for the duration of the
/// check. The comment/string-stripped projection is computed up front so
/// every rule works from the same view.
pub struct SourceFile {
    path: PathBuf,
    text: String,
    stripped: String,
}

impl SourceFile {
    /// Read a file into a `SourceFile`. The handle is released as soon as
    /// the content is captured.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    pub fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| HdrGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(path.to_path_buf(), text))
    }

    #[must_use]
    pub fn new(path: PathBuf, text: String) -> Self {
        let stripped = strip_comments_and_strings(&text);
        Self {
            path,
            text,
            stripped,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw text as read from disk.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text with comment and string-literal content blanked out.
    #[must_use]
    pub fn stripped(&self) -> &str {
        &self.stripped
    }
}

#[derive(PartialEq, Eq, Clone, Copy)]
enum State {
    Code,
    Line,
    Block,
    Str,
    Char,
}

/// Replace comment and string-literal content with spaces, preserving
/// newlines so token boundaries survive. Raw string literals and line
/// continuations are not modeled; tokens hidden behind them may still leak
/// into the stripped view.
#[must_use]
pub fn strip_comments_and_strings(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut state = State::Code;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Code => match c {
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    out.push_str("  ");
                    state = State::Line;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    out.push_str("  ");
                    state = State::Block;
                }
                '"' => {
                    out.push(' ');
                    state = State::Str;
                }
                '\'' => {
                    out.push(' ');
                    state = State::Char;
                }
                _ => out.push(c),
            },
            State::Line => {
                if c == '\n' {
                    out.push('\n');
                    state = State::Code;
                } else {
                    out.push(' ');
                }
            }
            State::Block => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    out.push_str("  ");
                    state = State::Code;
                } else if c == '\n' {
                    out.push('\n');
                } else {
                    out.push(' ');
                }
            }
            State::Str | State::Char => {
                let closer = if state == State::Str { '"' } else { '\'' };
                if c == '\\' {
                    out.push(' ');
                    if chars.next().is_some() {
                        out.push(' ');
                    }
                } else if c == closer {
                    out.push(' ');
                    state = State::Code;
                } else if c == '\n' {
                    // Unterminated literal; resync at the line break.
                    out.push('\n');
                    state = State::Code;
                } else {
                    out.push(' ');
                }
            }
        }
    }

    out
}

/// Extract every `class` body from stripped text by walking brace depth
/// from the opening brace. Nested class bodies are returned as well.
/// Forward declarations are skipped.
#[must_use]
pub fn class_bodies(text: &str) -> Vec<&str> {
    let mut bodies = Vec::new();
    for keyword in CLASS_RE.find_iter(text) {
        let Some(open) = find_body_open(text, keyword.end()) else {
            continue;
        };
        if let Some(close) = find_matching_brace(text, open) {
            bodies.push(&text[open + 1..close]);
        }
    }
    bodies
}

/// Find the `{` introducing a class body, giving up at `;` (forward
/// declaration) or a stray `}`.
fn find_body_open(text: &str, from: usize) -> Option<usize> {
    for (i, c) in text[from..].char_indices() {
        match c {
            '{' => return Some(from + i),
            ';' | '}' => return None,
            _ => {}
        }
    }
    None
}

fn find_matching_brace(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
