use crate::config::{render_config, RewriteConfig};
use crate::errors::{Error, Result};
use crate::io::FileSystem;
use std::path::Path;

const HEADER: &str = "# repackage configuration
#
# Each [[mappings]] entry names a directory relative to base_path and the
# package its source files should declare. Only files directly inside the
# directory are rewritten, and only when their package line starts with
# <legacy_root>.<one of legacy_segments>.

";

/// Write a starter configuration holding the built-in mapping table.
pub fn init_config<F: FileSystem>(fs: &F, config_path: &Path, force: bool) -> Result<()> {
    if fs.exists(config_path) && !force {
        return Err(Error::config_file(
            config_path,
            "file already exists. Use --force to overwrite.",
        ));
    }

    let body = render_config(&RewriteConfig::default())?;
    fs.write(config_path, &format!("{}{}", HEADER, body))?;
    log::info!("Wrote {}", config_path.display());
    Ok(())
}
