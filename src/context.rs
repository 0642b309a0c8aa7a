// File: ./src/context.rs
/*! Application context abstraction for filesystem paths.

This module provides an `AppContext` trait that encapsulates how the
program locates its quote store, its usage log directory, and its
configuration file. Two concrete implementations are provided:

- `StandardContext`: Roots the store and logs at the install location
  (the directory containing the executable), optionally redirected with
  an override root. The config file lives in the platform config
  directory via `directories::ProjectDirs` unless an override root is
  set.
- `TestContext`: Creates a temporary directory for isolated tests and
  cleans it up when dropped.

Consumers must explicitly pass a `&dyn AppContext` to any code that
performs filesystem IO. This removes hidden global state and lets tests
point the whole pipeline at a temporary store and log.
*/

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

/// Filename of the quote store, resolved against the context root.
pub const QUOTES_FILENAME: &str = "quotes.json";
/// Subdirectory holding the usage log, resolved against the context root.
pub const LOGS_DIRNAME: &str = "logs";
/// Filename of the optional presentation config.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Defines the file system context for the application.
///
/// The trait is object-safe so callers can hold `&dyn AppContext`.
pub trait AppContext: Send + Sync + std::fmt::Debug {
    fn quotes_path(&self) -> Result<PathBuf>;
    fn logs_dir(&self) -> Result<PathBuf>;
    fn config_file_path(&self) -> Result<PathBuf>;

    fn log_file_path(&self) -> Result<PathBuf> {
        Ok(self.logs_dir()?.join(crate::journal::LOG_FILENAME))
    }
}

// --- Production Implementation ---

#[derive(Clone, Debug)]
pub struct StandardContext {
    override_root: Option<PathBuf>,
}

impl StandardContext {
    /// Create a new StandardContext.
    ///
    /// When `override_root` is `Some(path)`, the quote store, the log
    /// directory and the config file are all resolved under that root
    /// instead of the install location.
    pub fn new(override_root: Option<PathBuf>) -> Self {
        Self { override_root }
    }

    fn ensure_exists(path: PathBuf) -> Result<PathBuf> {
        if !path.exists() {
            std::fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(path)
    }

    /// The directory the store and logs hang off: the override root when
    /// given, otherwise the directory containing the executable.
    fn install_root(&self) -> Result<PathBuf> {
        if let Some(root) = &self.override_root {
            return Ok(root.clone());
        }
        let exe = env::current_exe().context("Could not determine executable location")?;
        exe.parent()
            .map(|p| p.to_path_buf())
            .ok_or_else(|| anyhow::anyhow!("Executable has no parent directory"))
    }

    fn get_proj_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "quotidie", "quotidie")
    }
}

impl AppContext for StandardContext {
    fn quotes_path(&self) -> Result<PathBuf> {
        Ok(self.install_root()?.join(QUOTES_FILENAME))
    }

    fn logs_dir(&self) -> Result<PathBuf> {
        Self::ensure_exists(self.install_root()?.join(LOGS_DIRNAME))
    }

    fn config_file_path(&self) -> Result<PathBuf> {
        if let Some(root) = &self.override_root {
            return Ok(root.join(CONFIG_FILENAME));
        }
        let proj = Self::get_proj_dirs().ok_or_else(|| anyhow::anyhow!("No home directory"))?;
        let dir = Self::ensure_exists(proj.config_dir().to_path_buf())?;
        Ok(dir.join(CONFIG_FILENAME))
    }
}

// --- Test Implementation ---

#[derive(Clone, Debug)]
pub struct TestContext {
    pub root: PathBuf,
}

impl TestContext {
    /// Creates a new TestContext backed by a unique temporary directory.
    ///
    /// The directory is created immediately and removed when the `TestContext`
    /// is dropped.
    pub fn new() -> Self {
        let uuid = uuid::Uuid::new_v4();
        let root = std::env::temp_dir().join(format!("quotidie_test_{}", uuid));
        // Best-effort create; tests will panic if this fails.
        std::fs::create_dir_all(&root).expect("failed to create TestContext temp dir");
        Self { root }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContext for TestContext {
    fn quotes_path(&self) -> Result<PathBuf> {
        Ok(self.root.join(QUOTES_FILENAME))
    }

    fn logs_dir(&self) -> Result<PathBuf> {
        let p = self.root.join(LOGS_DIRNAME);
        std::fs::create_dir_all(&p)?;
        Ok(p)
    }

    fn config_file_path(&self) -> Result<PathBuf> {
        Ok(self.root.join(CONFIG_FILENAME))
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        // Best-effort cleanup; ignore errors.
        let _ = std::fs::remove_dir_all(&self.root);
    }
}
