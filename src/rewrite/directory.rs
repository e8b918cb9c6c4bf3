use std::path::Path;

use super::file::update_package_declaration;
use super::report::Reporter;
use super::summary::DirectoryOutcome;
use super::RewriteRules;
use crate::errors::{Error, Result};
use crate::io::FileSystem;

/// Rewrite every candidate source file directly inside
/// `base_path/relative_path`.
///
/// A directory that does not exist is not an error: the outcome comes back
/// with `found == false` and nothing updated. Subdirectories are never
/// visited; nested packages need their own mapping entry.
pub fn process_directory<F: FileSystem, R: Reporter + ?Sized>(
    fs: &F,
    rules: &RewriteRules,
    base_path: &Path,
    relative_path: &str,
    new_package: &str,
    reporter: &mut R,
) -> Result<DirectoryOutcome> {
    let full_path = base_path.join(relative_path);

    if !fs.exists(&full_path) {
        log::debug!("Skipping {}: directory not found", full_path.display());
        return Ok(DirectoryOutcome::missing(relative_path, new_package));
    }

    let mut outcome = DirectoryOutcome {
        found: true,
        ..DirectoryOutcome::missing(relative_path, new_package)
    };

    for file_path in fs.list_files(&full_path)? {
        let Some(file_name) = file_path.file_name().map(|n| n.to_string_lossy().into_owned())
        else {
            continue;
        };
        if !file_name.ends_with(&rules.source_suffix) {
            log::trace!("Skipping {}: not a source file", file_path.display());
            continue;
        }

        outcome.scanned += 1;
        if update_package_declaration(fs, &file_path, new_package, &rules.pattern, rules.mode)? {
            reporter
                .file_updated(relative_path, &file_name, rules.mode)
                .map_err(|e| Error::report("Failed to write progress", e))?;
            outcome.updated.push(file_path);
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::report::{ConsoleReporter, NullReporter};
    use crate::rewrite::RunMode;
    use crate::testkit::{java_source, ConfigBuilder, MemoryFileSystem};
    use std::path::PathBuf;

    fn rules(mode: RunMode) -> RewriteRules {
        RewriteRules::from_config(&ConfigBuilder::new("/base").build(), mode).unwrap()
    }

    #[test]
    fn test_missing_directory_is_silent_noop() {
        let fs = MemoryFileSystem::new().with_file("/base/other/A.java", "");
        let outcome = process_directory(
            &fs,
            &rules(RunMode::Apply),
            Path::new("/base"),
            "domain",
            "x.domain",
            &mut NullReporter,
        )
        .unwrap();

        assert!(!outcome.found);
        assert_eq!(outcome.updated_count(), 0);
    }

    #[test]
    fn test_only_java_files_directly_inside_are_considered() {
        let legacy = java_source("org.lareferencia.backend.domain", "A");
        let fs = MemoryFileSystem::new().with_files(vec![
            ("/base/domain/A.java", legacy.as_str()),
            ("/base/domain/notes.txt", legacy.as_str()),
            ("/base/domain/A.java.bak", legacy.as_str()),
            ("/base/domain/nested/B.java", legacy.as_str()),
        ]);

        let outcome = process_directory(
            &fs,
            &rules(RunMode::Apply),
            Path::new("/base"),
            "domain",
            "org.lareferencia.core.domain",
            &mut NullReporter,
        )
        .unwrap();

        assert_eq!(outcome.scanned, 1);
        assert_eq!(outcome.updated, vec![PathBuf::from("/base/domain/A.java")]);
        assert_eq!(fs.contents("/base/domain/nested/B.java").as_deref(), Some(legacy.as_str()));
        assert_eq!(fs.contents("/base/domain/notes.txt").as_deref(), Some(legacy.as_str()));
    }

    #[test]
    fn test_non_matching_files_are_not_counted() {
        let fs = MemoryFileSystem::new().with_files(vec![
            ("/base/task/A.java", "package org.lareferencia.core.task;\n"),
            ("/base/task/B.java", "package com.vendor.task;\n"),
        ]);

        let mut reporter = ConsoleReporter::plain(Vec::new());
        let outcome = process_directory(
            &fs,
            &rules(RunMode::Apply),
            Path::new("/base"),
            "task",
            "org.lareferencia.platform.task",
            &mut reporter,
        )
        .unwrap();

        assert_eq!(outcome.scanned, 2);
        assert_eq!(outcome.updated_count(), 1);
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(out, "  [OK] task/A.java\n");
    }

    #[test]
    fn test_nested_relative_path() {
        let fs = MemoryFileSystem::new().with_file(
            "/base/worker/validation/validator/V.java",
            "package org.lareferencia.backend.validation.validator;\n",
        );
        let outcome = process_directory(
            &fs,
            &rules(RunMode::Apply),
            Path::new("/base"),
            "worker/validation/validator",
            "org.lareferencia.core.worker.validation.validator",
            &mut NullReporter,
        )
        .unwrap();

        assert_eq!(outcome.updated_count(), 1);
        assert_eq!(
            fs.contents("/base/worker/validation/validator/V.java").unwrap(),
            "package org.lareferencia.core.worker.validation.validator;\n"
        );
    }

    #[test]
    fn test_empty_directory() {
        let fs = MemoryFileSystem::new().with_dir("/base/domain");
        let outcome = process_directory(
            &fs,
            &rules(RunMode::Apply),
            Path::new("/base"),
            "domain",
            "x.domain",
            &mut NullReporter,
        )
        .unwrap();
        assert!(outcome.found);
        assert_eq!(outcome.scanned, 0);
    }

    #[test]
    fn test_mapping_path_that_is_a_file_fails() {
        let fs = MemoryFileSystem::new().with_file("/base/domain", "package a.b;\n");
        let err = process_directory(
            &fs,
            &rules(RunMode::Apply),
            Path::new("/base"),
            "domain",
            "x.domain",
            &mut NullReporter,
        )
        .unwrap_err();
        assert!(err.is_io());
        assert_eq!(err.path(), Some(Path::new("/base/domain")));
    }
}
