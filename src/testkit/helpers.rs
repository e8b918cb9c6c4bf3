//! Factory functions for rewriter test data.
//!
//! | Helper | Purpose |
//! |--------|---------|
//! | [`java_source`] | Minimal compilation unit with a package line |
//! | [`ConfigBuilder`] | Build test configurations fluently |

use crate::config::{MappingEntry, RewriteConfig};
use std::path::PathBuf;

/// A small Java class declared in `package`.
///
/// ```rust
/// use repackage::testkit::java_source;
///
/// let src = java_source("org.lareferencia.backend.domain", "Foo");
/// assert!(src.starts_with("package org.lareferencia.backend.domain;\n"));
/// ```
pub fn java_source(package: &str, class: &str) -> String {
    format!(
        "package {package};\n\nimport java.util.List;\n\npublic class {class} {{\n    private List<String> items;\n}}\n"
    )
}

/// Fluent builder for [`RewriteConfig`] in tests.
///
/// Starts from an empty mapping table so tests only list the directories
/// they care about.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: RewriteConfig,
}

impl ConfigBuilder {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            config: RewriteConfig::with_mappings(base_path, Vec::new()),
        }
    }

    pub fn mapping(mut self, relative_path: &str, target_package: &str) -> Self {
        self.config
            .mappings
            .push(MappingEntry::new(relative_path, target_package));
        self
    }

    pub fn legacy_root(mut self, root: &str) -> Self {
        self.config.legacy_root = root.to_string();
        self
    }

    pub fn legacy_segments(mut self, segments: &[&str]) -> Self {
        self.config.legacy_segments = segments.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn source_extension(mut self, extension: &str) -> Self {
        self.config.source_extension = extension.to_string();
        self
    }

    pub fn build(self) -> RewriteConfig {
        self.config
    }
}
