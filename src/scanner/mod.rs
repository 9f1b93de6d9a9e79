mod filter;
mod node;

pub use filter::{EntryFilter, HeaderFilter};
pub use node::{BLANK, BRANCH, NodeKind, PIPE, TERMINAL, TreeNode};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::checker::{Diagnostic, FileReport, RuleKind};
use crate::error::Result;

/// Trait for scanning a directory tree into renderable nodes.
pub trait FileScanner {
    /// Produce the pre-order node sequence for everything under `root`,
    /// siblings sorted lexicographically by name. The root itself is not
    /// part of the sequence.
    ///
    /// # Errors
    /// Returns an error if the walk cannot be set up; entries that fail
    /// mid-walk degrade to per-entry warning nodes instead.
    fn scan(&self, root: &Path) -> Result<Vec<TreeNode>>;
}

pub struct TreeScanner<F: EntryFilter> {
    filter: F,
    use_gitignore: bool,
}

impl<F: EntryFilter> TreeScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            use_gitignore: false,
        }
    }

    #[must_use]
    pub const fn with_gitignore(filter: F, use_gitignore: bool) -> Self {
        Self {
            filter,
            use_gitignore,
        }
    }

    fn scan_impl(&self, root: &Path) -> Vec<TreeNode> {
        if self.use_gitignore {
            self.scan_with_gitignore(root)
        } else {
            self.scan_with_walkdir(root)
        }
    }

    fn scan_with_walkdir(&self, root: &Path) -> Vec<TreeNode> {
        let mut state = TreeState::new();
        let walker = WalkDir::new(root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.filter.is_excluded(e.path()));

        for entry in walker {
            match entry {
                Ok(entry) => {
                    let kind = if entry.file_type().is_dir() {
                        NodeKind::Directory
                    } else {
                        NodeKind::File
                    };
                    state.push_entry(entry.path(), entry.depth(), kind, &self.filter);
                }
                Err(err) => state.push_unreadable(err.path(), err.depth()),
            }
        }

        state.finalize()
    }

    fn scan_with_gitignore(&self, root: &Path) -> Vec<TreeNode> {
        use ignore::WalkBuilder;

        let mut state = TreeState::new();
        let mut builder = WalkBuilder::new(root);
        builder
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .hidden(false)
            .parents(false)
            .sort_by_file_name(|a, b| a.cmp(b));

        // The ignore walker's filter_entry demands a 'static closure, so
        // exclusion pruning is done inline by tracking the pruned depth.
        let mut pruned: Option<usize> = None;
        for entry in builder.build() {
            let Ok(entry) = entry else {
                continue;
            };
            let depth = entry.depth();
            if depth == 0 {
                continue;
            }
            if let Some(pruned_depth) = pruned {
                if depth > pruned_depth {
                    continue;
                }
                pruned = None;
            }

            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            if self.filter.is_excluded(entry.path()) {
                if is_dir {
                    pruned = Some(depth);
                }
                continue;
            }

            let kind = if is_dir {
                NodeKind::Directory
            } else {
                NodeKind::File
            };
            state.push_entry(entry.path(), depth, kind, &self.filter);
        }

        state.finalize()
    }
}

impl<F: EntryFilter> FileScanner for TreeScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<TreeNode>> {
        Ok(self.scan_impl(root))
    }
}

struct RawEntry {
    path: PathBuf,
    name: String,
    kind: NodeKind,
    depth: usize,
    candidate: bool,
    report: Option<FileReport>,
}

/// Accumulates walk entries, then resolves sibling positions into prefix
/// glyph runs. Both walk variants feed this state.
struct TreeState {
    entries: Vec<RawEntry>,
}

impl TreeState {
    const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn push_entry(&mut self, path: &Path, depth: usize, kind: NodeKind, filter: &impl EntryFilter) {
        let name = path.file_name().map_or_else(
            || path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        let candidate = kind == NodeKind::File && filter.is_candidate(path);
        self.entries.push(RawEntry {
            path: path.to_path_buf(),
            name,
            kind,
            depth,
            candidate,
            report: None,
        });
    }

    /// A walk entry that could not be listed or statted still gets a line,
    /// carrying a warning instead of aborting the run.
    fn push_unreadable(&mut self, path: Option<&Path>, depth: usize) {
        let name = path.and_then(Path::file_name).map_or_else(
            || "<unreadable>".to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        let mut report = FileReport::default();
        report.push(Diagnostic::warning(
            RuleKind::Unreadable,
            "Warning: unreadable entry.",
        ));
        self.entries.push(RawEntry {
            path: path.map(Path::to_path_buf).unwrap_or_default(),
            name,
            kind: NodeKind::File,
            depth: depth.max(1),
            candidate: false,
            report: Some(report),
        });
    }

    fn finalize(self) -> Vec<TreeNode> {
        let last_flags = compute_last_flags(&self.entries);

        let mut flags: Vec<bool> = Vec::new();
        self.entries
            .into_iter()
            .zip(last_flags)
            .map(|(entry, is_last)| {
                flags.truncate(entry.depth - 1);
                let mut prefix = String::new();
                for &ancestor_is_last in &flags {
                    prefix.push_str(if ancestor_is_last { BLANK } else { PIPE });
                }
                prefix.push_str(if is_last { TERMINAL } else { BRANCH });
                flags.push(is_last);

                TreeNode {
                    path: entry.path,
                    name: entry.name,
                    kind: entry.kind,
                    depth: entry.depth,
                    prefix,
                    candidate: entry.candidate,
                    report: entry.report,
                }
            })
            .collect()
    }
}

/// An entry is the last of its siblings iff no later entry appears at the
/// same depth before the walk returns to a shallower one. Entries arrive in
/// pre-order, so one open slot per depth suffices.
fn compute_last_flags(entries: &[RawEntry]) -> Vec<bool> {
    let mut last = vec![true; entries.len()];
    let mut open: Vec<usize> = Vec::new();

    for (i, entry) in entries.iter().enumerate() {
        let depth = entry.depth;
        open.truncate(depth);
        if let Some(slot) = open.get_mut(depth - 1) {
            last[*slot] = false;
            *slot = i;
        } else {
            open.push(i);
        }
    }

    last
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
