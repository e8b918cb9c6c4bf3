//! In-memory [`FileSystem`] for fast, isolated rewriter tests.
//!
//! Directories are implied by the files stored beneath them; empty
//! directories can be declared with [`MemoryFileSystem::with_dir`].
//!
//! # Example
//!
//! ```rust
//! use repackage::io::FileSystem;
//! use repackage::testkit::MemoryFileSystem;
//! use std::path::Path;
//!
//! let fs = MemoryFileSystem::new()
//!     .with_file("/src/domain/Foo.java", "package org.lareferencia.backend.domain;\n");
//!
//! assert!(fs.exists(Path::new("/src/domain")));
//! assert_eq!(fs.list_files(Path::new("/src/domain")).unwrap().len(), 1);
//! ```

use crate::errors::{Error, Result};
use crate::io::traits::FileSystem;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::io::ErrorKind;
use std::ops::Bound;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct MemoryFileSystem {
    files: Arc<RwLock<BTreeMap<PathBuf, Vec<u8>>>>,
    dirs: Arc<RwLock<BTreeSet<PathBuf>>>,
    read_only: Arc<RwLock<HashSet<PathBuf>>>,
    writes: Arc<RwLock<Vec<PathBuf>>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text file.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.with_bytes(path, content.into().into_bytes())
    }

    /// Add a file with raw, possibly non-UTF-8, contents.
    pub fn with_bytes(self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.files
            .write()
            .expect("Lock poisoned")
            .insert(path.into(), content.into());
        self
    }

    /// Add several text files at once.
    pub fn with_files<'a>(mut self, files: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        for (path, content) in files {
            self = self.with_file(path, content);
        }
        self
    }

    /// Declare a directory, which may stay empty.
    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.dirs.write().expect("Lock poisoned").insert(path.into());
        self
    }

    /// Make writes to `path` fail with a permission error.
    pub fn with_read_only(self, path: impl Into<PathBuf>) -> Self {
        self.read_only
            .write()
            .expect("Lock poisoned")
            .insert(path.into());
        self
    }

    /// Current contents of a file, if it exists and is valid UTF-8.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .read()
            .expect("Lock poisoned")
            .get(path.as_ref())
            .and_then(|bytes| String::from_utf8(bytes.clone()).ok())
    }

    /// Every path written so far, in write order.
    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.writes.read().expect("Lock poisoned").clone()
    }

    // Paths order component-wise, so everything beneath `path` sorts
    // contiguously right after it.
    fn is_dir(&self, path: &Path) -> bool {
        let declared = self
            .dirs
            .read()
            .expect("Lock poisoned")
            .range::<Path, _>((Bound::Included(path), Bound::Unbounded))
            .next()
            .is_some_and(|dir| dir.starts_with(path));
        declared
            || self
                .files
                .read()
                .expect("Lock poisoned")
                .range::<Path, _>((Bound::Excluded(path), Bound::Unbounded))
                .next()
                .is_some_and(|(file, _)| file.starts_with(path))
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.read().expect("Lock poisoned").contains_key(path)
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let bytes = self
            .files
            .read()
            .expect("Lock poisoned")
            .get(path)
            .cloned()
            .ok_or_else(|| {
                Error::io(
                    "Failed to read file",
                    path,
                    std::io::Error::new(ErrorKind::NotFound, "file not found"),
                )
            })?;
        String::from_utf8(bytes).map_err(|e| {
            Error::io(
                "Failed to read file",
                path,
                std::io::Error::new(ErrorKind::InvalidData, e),
            )
        })
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        if self.read_only.read().expect("Lock poisoned").contains(path) {
            return Err(Error::io(
                "Failed to write file",
                path,
                std::io::Error::new(ErrorKind::PermissionDenied, "read-only file"),
            ));
        }
        self.files
            .write()
            .expect("Lock poisoned")
            .insert(path.to_path_buf(), content.as_bytes().to_vec());
        self.writes
            .write()
            .expect("Lock poisoned")
            .push(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.is_file(path) || self.is_dir(path)
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if self.is_file(dir) {
            return Err(Error::io(
                "Failed to list directory",
                dir,
                std::io::Error::new(ErrorKind::NotADirectory, "not a directory"),
            ));
        }
        if !self.is_dir(dir) {
            return Err(Error::io(
                "Failed to list directory",
                dir,
                std::io::Error::new(ErrorKind::NotFound, "directory not found"),
            ));
        }
        Ok(self
            .files
            .read()
            .expect("Lock poisoned")
            .range::<Path, _>((Bound::Excluded(dir), Bound::Unbounded))
            .map(|(file, _)| file)
            .take_while(|file| file.starts_with(dir))
            .filter(|file| file.parent() == Some(dir))
            .cloned()
            .collect())
    }
}
