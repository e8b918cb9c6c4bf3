//! Package declaration rewriting.
//!
//! [`run`] walks the mapping table in order. For each entry it rewrites the
//! legacy `package` line of every source file directly inside
//! `base_path/relative_path`. Processing is strictly sequential: each file is
//! read whole, optionally rewritten whole, and closed before the next.
//!
//! Two conditions are skipped rather than reported as errors:
//!
//! - a mapped directory that does not exist contributes zero files;
//! - a file without a legacy declaration is left alone and not counted.
//!
//! Any other failure (unreadable file, non-UTF-8 content, failed write)
//! aborts the run at once. Files already rewritten keep their new content.

mod directory;
mod file;
pub mod pattern;
pub mod report;
mod summary;

pub use directory::process_directory;
pub use file::update_package_declaration;
pub use pattern::{PackagePattern, PackageRewrite};
pub use report::{ConsoleReporter, NullReporter, Reporter};
pub use summary::{DirectoryOutcome, RunSummary};

use crate::config::RewriteConfig;
use crate::errors::{Error, Result};
use crate::io::FileSystem;

/// Whether matched files are rewritten or only counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Apply,
    DryRun,
}

impl RunMode {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run {
            Self::DryRun
        } else {
            Self::Apply
        }
    }

    pub fn writes(self) -> bool {
        self == Self::Apply
    }
}

/// Per-run settings shared by every directory: the compiled pattern, the
/// file name suffix and the run mode.
#[derive(Debug, Clone)]
pub struct RewriteRules {
    pub pattern: PackagePattern,
    pub source_suffix: String,
    pub mode: RunMode,
}

impl RewriteRules {
    pub fn from_config(config: &RewriteConfig, mode: RunMode) -> Result<Self> {
        Ok(Self {
            pattern: PackagePattern::from_config(config)?,
            source_suffix: config.source_suffix(),
            mode,
        })
    }
}

/// Process every mapping entry and report progress through `reporter`.
pub fn run<F: FileSystem, R: Reporter + ?Sized>(
    fs: &F,
    config: &RewriteConfig,
    reporter: &mut R,
    mode: RunMode,
) -> Result<RunSummary> {
    let rules = RewriteRules::from_config(config, mode)?;
    log::debug!("Legacy package pattern: {}", rules.pattern.as_str());

    let report_err = |e| Error::report("Failed to write progress", e);

    reporter.banner(mode).map_err(report_err)?;

    let mut summary = RunSummary::new(mode);
    for entry in &config.mappings {
        reporter
            .directory_started(&entry.relative_path, &entry.target_package)
            .map_err(report_err)?;
        let outcome = process_directory(
            fs,
            &rules,
            &config.base_path,
            &entry.relative_path,
            &entry.target_package,
            &mut *reporter,
        )?;
        summary.directories.push(outcome);
    }

    log::info!(
        "Examined {} source files, {} updated, {} directories missing",
        summary.total_scanned(),
        summary.total_updated(),
        summary.missing_directories().count()
    );
    reporter.finished(&summary).map_err(report_err)?;
    Ok(summary)
}
