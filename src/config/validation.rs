use std::collections::HashSet;
use std::path::Path;

use super::core::RewriteConfig;

/// Check the invariants the rewriter relies on.
///
/// Returns every problem found rather than stopping at the first one, so a
/// hand-edited file can be fixed in a single pass.
pub fn validate_config(config: &RewriteConfig) -> Result<(), Vec<String>> {
    let mut problems = Vec::new();

    if config.legacy_root.trim().is_empty() {
        problems.push("legacy_root must not be empty".to_string());
    }

    if config.legacy_segments.is_empty() {
        problems.push("legacy_segments must list at least one segment".to_string());
    }
    if config.legacy_segments.iter().any(|s| s.trim().is_empty()) {
        problems.push("legacy_segments must not contain empty segments".to_string());
    }

    if config.source_extension.trim().is_empty() {
        problems.push("source_extension must not be empty".to_string());
    }

    let mut seen = HashSet::new();
    for entry in &config.mappings {
        if Path::new(&entry.relative_path).is_absolute() {
            problems.push(format!(
                "mapping '{}' must be relative to base_path",
                entry.relative_path
            ));
        }
        if entry.target_package.trim().is_empty() {
            problems.push(format!(
                "mapping '{}' has an empty target_package",
                entry.relative_path
            ));
        }
        if !seen.insert(entry.relative_path.as_str()) {
            problems.push(format!("duplicate mapping '{}'", entry.relative_path));
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems)
    }
}
