use std::path::Path;

use super::pattern::PackagePattern;
use super::RunMode;
use crate::errors::Result;
use crate::io::FileSystem;

/// Rewrite the first legacy package declaration in `file_path`.
///
/// The file is read whole and, when the declaration changes, overwritten in
/// place. No backup is made. Returns `false` without touching the file when
/// there is no legacy declaration. In [`RunMode::DryRun`] the write is
/// skipped but the return value reports what would have happened.
pub fn update_package_declaration<F: FileSystem>(
    fs: &F,
    file_path: &Path,
    new_package: &str,
    pattern: &PackagePattern,
    mode: RunMode,
) -> Result<bool> {
    let content = fs.read_to_string(file_path)?;

    let Some(rewrite) = pattern.rewrite_declaration(&content, new_package) else {
        log::debug!("{}: no legacy package declaration", file_path.display());
        return Ok(false);
    };
    log::debug!(
        "{}: {} -> {}",
        file_path.display(),
        rewrite.old_package,
        new_package
    );

    if mode.writes() {
        fs.write(file_path, &rewrite.content)?;
    }
    Ok(true)
}
