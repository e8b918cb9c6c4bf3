//! Production implementation of [`FileSystem`].

use crate::errors::{Error, Result};
use crate::io::traits::FileSystem;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File system implementation backed by `std::fs` and `walkdir`.
#[derive(Debug, Default, Clone)]
pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| Error::io("Failed to read file", path, e))
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).map_err(|e| Error::io("Failed to write file", path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let metadata =
            fs::metadata(dir).map_err(|e| Error::io("Failed to list directory", dir, e))?;
        if !metadata.is_dir() {
            return Err(Error::io(
                "Failed to list directory",
                dir,
                std::io::Error::new(ErrorKind::NotADirectory, "not a directory"),
            ));
        }

        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                Error::io("Failed to list directory", path, e.into())
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_files_is_shallow_and_sorted() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("B.java"), "").unwrap();
        fs::write(temp.path().join("A.java"), "").unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested").join("C.java"), "").unwrap();

        let files = RealFileSystem::new().list_files(temp.path()).unwrap();
        assert_eq!(
            files,
            vec![temp.path().join("A.java"), temp.path().join("B.java")]
        );
    }

    #[test]
    fn test_list_files_on_missing_dir_fails() {
        let temp = TempDir::new().unwrap();
        let err = RealFileSystem::new()
            .list_files(&temp.path().join("gone"))
            .unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_list_files_on_regular_file_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("domain");
        fs::write(&path, "not a directory").unwrap();

        let err = RealFileSystem::new().list_files(&path).unwrap_err();
        assert!(err.is_io());
        assert_eq!(err.path(), Some(path.as_path()));
        assert!(err.to_string().starts_with("Failed to list directory"));
    }

    #[test]
    fn test_read_non_utf8_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Latin1.java");
        fs::write(&path, [0x70, 0xE9, 0xFF]).unwrap();
        let err = RealFileSystem::new().read_to_string(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read file"));
    }

    #[test]
    fn test_write_then_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Foo.java");
        let fs = RealFileSystem::new();
        fs.write(&path, "package a.b;\n").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "package a.b;\n");
    }
}
