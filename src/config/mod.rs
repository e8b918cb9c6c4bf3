//! Rewriter configuration.
//!
//! The built-in [`RewriteConfig::default`] carries the mapping table the tool
//! was written for. A `.repackage.toml` in the working directory (or one of
//! its ancestors), or an explicit `--config` file, replaces it.

mod core;
mod loader;
pub mod validation;

pub use self::core::{
    default_mappings, MappingEntry, RewriteConfig, DEFAULT_BASE_PATH, DEFAULT_LEGACY_ROOT,
    DEFAULT_LEGACY_SEGMENTS, DEFAULT_SOURCE_EXTENSION,
};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path,
    parse_and_validate_config, render_config, resolve_config, ConfigSource, CONFIG_FILE_NAME,
};
pub use validation::validate_config;
