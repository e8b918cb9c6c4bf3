use std::path::PathBuf;

use super::RunMode;

/// Result of processing one mapping entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryOutcome {
    pub relative_path: String,
    pub target_package: String,
    /// Whether `base_path/relative_path` existed
    pub found: bool,
    /// Candidate source files examined
    pub scanned: usize,
    /// Files rewritten (or that would be, in a dry run)
    pub updated: Vec<PathBuf>,
}

impl DirectoryOutcome {
    pub fn missing(relative_path: &str, target_package: &str) -> Self {
        Self {
            relative_path: relative_path.to_string(),
            target_package: target_package.to_string(),
            found: false,
            scanned: 0,
            updated: Vec::new(),
        }
    }

    pub fn updated_count(&self) -> usize {
        self.updated.len()
    }
}

/// Result of a full run, one outcome per mapping entry in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub mode: RunMode,
    pub directories: Vec<DirectoryOutcome>,
}

impl RunSummary {
    pub fn new(mode: RunMode) -> Self {
        Self {
            mode,
            directories: Vec::new(),
        }
    }

    pub fn total_updated(&self) -> usize {
        self.directories.iter().map(DirectoryOutcome::updated_count).sum()
    }

    pub fn total_scanned(&self) -> usize {
        self.directories.iter().map(|d| d.scanned).sum()
    }

    /// Mapping paths that were skipped because the directory was absent.
    pub fn missing_directories(&self) -> impl Iterator<Item = &str> {
        self.directories
            .iter()
            .filter(|d| !d.found)
            .map(|d| d.relative_path.as_str())
    }

    pub fn updated_files(&self) -> impl Iterator<Item = &PathBuf> {
        self.directories.iter().flat_map(|d| d.updated.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        let mut summary = RunSummary::new(RunMode::Apply);
        summary.directories.push(DirectoryOutcome {
            relative_path: "domain".into(),
            target_package: "x.domain".into(),
            found: true,
            scanned: 3,
            updated: vec![PathBuf::from("/b/domain/A.java"), PathBuf::from("/b/domain/B.java")],
        });
        summary
            .directories
            .push(DirectoryOutcome::missing("task", "x.task"));

        assert_eq!(summary.total_updated(), 2);
        assert_eq!(summary.total_scanned(), 3);
        assert_eq!(summary.missing_directories().collect::<Vec<_>>(), vec!["task"]);
        assert_eq!(summary.updated_files().count(), 2);
    }
}
