//! I/O trait definitions for the package rewriter.
//!
//! The rewrite operations only touch the disk through [`FileSystem`], so the
//! same code runs against the real tree in production and against
//! [`crate::testkit::MemoryFileSystem`] in unit tests.

use crate::errors::Result;
use std::path::{Path, PathBuf};

/// File system operations trait.
pub trait FileSystem {
    /// Read a file's contents as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if:
    /// - The file doesn't exist
    /// - Permission is denied
    /// - The file isn't valid UTF-8
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Replace a file's contents.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if:
    /// - Permission is denied
    /// - Parent directory doesn't exist
    /// - Disk is full
    fn write(&self, path: &Path, content: &str) -> Result<()>;

    /// Check if a path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Regular files directly inside `dir`, sorted by file name.
    ///
    /// Subdirectories are neither returned nor descended into.
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>>;
}
