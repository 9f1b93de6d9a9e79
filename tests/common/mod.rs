#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a file with raw bytes (for non-UTF-8 fixtures).
    pub fn create_binary_file(&self, relative_path: &str, content: &[u8]) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a basic hdr-guard config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".hdr-guard.toml", content);
    }

    /// Creates a header that satisfies every rule.
    pub fn create_clean_header(&self, relative_path: &str) {
        self.create_file(relative_path, "#pragma once\nclass Clean {\npublic:\n};\n");
    }

    /// Creates a header without an include guard.
    pub fn create_unguarded_header(&self, relative_path: &str) {
        self.create_file(relative_path, "class Unguarded {\n};\n");
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
