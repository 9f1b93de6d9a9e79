use std::path::{Path, PathBuf};

use crate::error::{HdrGuardError, Result};

use super::Config;

pub const LOCAL_CONFIG_NAME: &str = ".hdr-guard.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if a discovered config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Platform-specific configuration directory for hdr-guard
    /// (e.g. `~/.config/hdr-guard` on Linux).
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "hdr-guard")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Loads `.hdr-guard.toml` from the working directory, falling back to the
/// user config directory, then to built-in defaults.
pub struct FileConfigLoader<FS: FileSystem = RealFileSystem> {
    fs: FS,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<FS: FileSystem> FileConfigLoader<FS> {
    #[must_use]
    pub const fn with_fs(fs: FS) -> Self {
        Self { fs }
    }

    fn discover(&self) -> Option<PathBuf> {
        let cwd = self.fs.current_dir().ok()?;
        let local = cwd.join(LOCAL_CONFIG_NAME);
        if self.fs.exists(&local) {
            return Some(local);
        }

        let user = self.fs.config_dir()?.join(USER_CONFIG_NAME);
        self.fs.exists(&user).then_some(user)
    }
}

impl<FS: FileSystem> ConfigLoader for FileConfigLoader<FS> {
    fn load(&self) -> Result<Config> {
        self.discover()
            .map_or_else(|| Ok(Config::default()), |path| self.load_from_path(&path))
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content =
            self.fs
                .read_to_string(path)
                .map_err(|source| HdrGuardError::FileRead {
                    path: path.to_path_buf(),
                    source,
                })?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
