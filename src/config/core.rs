use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Source tree the built-in mapping table was written for.
pub const DEFAULT_BASE_PATH: &str =
    "/Users/lmatas/source/lareferencia-platform/lareferencia-core-lib/src/main/java/org/lareferencia/core";

/// Package prefix shared by every legacy declaration.
pub const DEFAULT_LEGACY_ROOT: &str = "org.lareferencia";

/// Second segments that mark a declaration as legacy.
pub const DEFAULT_LEGACY_SEGMENTS: &[&str] = &["backend", "core"];

pub const DEFAULT_SOURCE_EXTENSION: &str = "java";

/// Built-in directory to package table, in reporting order.
const DEFAULT_MAPPINGS: &[(&str, &str)] = &[
    ("domain", "org.lareferencia.core.domain"),
    ("repository/jpa", "org.lareferencia.core.repository.jpa"),
    ("repository/parquet", "org.lareferencia.core.repository.parquet"),
    ("service/harvesting", "org.lareferencia.core.service.harvesting"),
    ("service/validation", "org.lareferencia.core.service.validation"),
    ("service/indexing", "org.lareferencia.core.service.indexing"),
    ("service/management", "org.lareferencia.core.service.management"),
    ("worker/harvesting", "org.lareferencia.core.worker.harvesting"),
    ("worker/validation", "org.lareferencia.core.worker.validation"),
    (
        "worker/validation/validator",
        "org.lareferencia.core.worker.validation.validator",
    ),
    (
        "worker/validation/transformer",
        "org.lareferencia.core.worker.validation.transformer",
    ),
    ("worker/indexing", "org.lareferencia.core.worker.indexing"),
    ("worker/management", "org.lareferencia.core.worker.management"),
    ("task", "org.lareferencia.core.task"),
];

/// One row of the mapping table: a directory relative to the base path and
/// the package every source file inside it should declare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub relative_path: String,
    pub target_package: String,
}

impl MappingEntry {
    pub fn new(relative_path: impl Into<String>, target_package: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            target_package: target_package.into(),
        }
    }
}

/// Root configuration structure for repackage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteConfig {
    /// Directory every mapping path is resolved against
    #[serde(default = "default_base_path")]
    pub base_path: PathBuf,

    /// Package prefix legacy declarations start with
    #[serde(default = "default_legacy_root")]
    pub legacy_root: String,

    /// Accepted second segments after the legacy root
    #[serde(default = "default_legacy_segments")]
    pub legacy_segments: Vec<String>,

    /// File name suffix (without the dot) of candidate source files
    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    /// Ordered directory to package table
    pub mappings: Vec<MappingEntry>,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            legacy_root: default_legacy_root(),
            legacy_segments: default_legacy_segments(),
            source_extension: default_source_extension(),
            mappings: default_mappings(),
        }
    }
}

impl RewriteConfig {
    /// Configuration with the default pattern settings and the given table.
    pub fn with_mappings(base_path: impl Into<PathBuf>, mappings: Vec<MappingEntry>) -> Self {
        Self {
            base_path: base_path.into(),
            mappings,
            ..Self::default()
        }
    }

    pub fn with_base_path(mut self, base_path: impl Into<PathBuf>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Suffix a file name must end with, including the leading dot.
    pub fn source_suffix(&self) -> String {
        format!(".{}", self.source_extension)
    }
}

fn default_base_path() -> PathBuf {
    PathBuf::from(DEFAULT_BASE_PATH)
}

fn default_legacy_root() -> String {
    DEFAULT_LEGACY_ROOT.to_string()
}

fn default_legacy_segments() -> Vec<String> {
    DEFAULT_LEGACY_SEGMENTS.iter().map(|s| s.to_string()).collect()
}

fn default_source_extension() -> String {
    DEFAULT_SOURCE_EXTENSION.to_string()
}

pub fn default_mappings() -> Vec<MappingEntry> {
    DEFAULT_MAPPINGS
        .iter()
        .map(|(path, package)| MappingEntry::new(*path, *package))
        .collect()
}
