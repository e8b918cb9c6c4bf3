use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::RewriteConfig;
use super::validation::validate_config;
use crate::errors::{Error, Result};

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".repackage.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed explicitly on the command line
    Explicit(PathBuf),
    /// Found by searching upwards from the working directory
    Discovered(PathBuf),
    /// No file found; built-in table in use
    BuiltIn,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Explicit(path) => write!(f, "{} (explicit)", path.display()),
            Self::Discovered(path) => write!(f, "{}", path.display()),
            Self::BuiltIn => write!(f, "built-in defaults"),
        }
    }
}

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML document and check it against the config invariants.
pub fn parse_and_validate_config(contents: &str) -> Result<RewriteConfig> {
    let config = toml::from_str::<RewriteConfig>(contents)?;
    validate_config(&config).map_err(|problems| Error::config(problems.join("; ")))?;
    Ok(config)
}

/// Load a configuration file the user asked for by name. Any failure is fatal.
pub fn load_config_from_path(path: &Path) -> Result<RewriteConfig> {
    let contents = read_config_file(path)
        .map_err(|e| Error::io("Failed to read config file", path, e))?;

    match parse_and_validate_config(&contents) {
        Ok(config) => Ok(config),
        Err(Error::Config(message)) => Err(Error::config_file(path, message)),
        Err(Error::Toml(e)) => Err(Error::config_file(path, e.to_string())),
        Err(e) => Err(e),
    }
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<RewriteConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("Ignoring {}: {}", config_path.display(), e);
            None
        }
    }
}

pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // "not found" is the normal case while searching upwards
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Yield `start` and its parents, at most `max_depth` directories in total.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search upwards from `start` for the first loadable config file.
pub fn discover_config(start: &Path) -> Option<(PathBuf, RewriteConfig)> {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path).map(|config| (path, config)))
}

/// Resolve the configuration: explicit path, then discovery from `start`,
/// then the built-in table.
pub fn resolve_config(
    explicit: Option<&Path>,
    start: &Path,
) -> Result<(RewriteConfig, ConfigSource)> {
    if let Some(path) = explicit {
        let config = load_config_from_path(path)?;
        return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
    }

    match discover_config(start) {
        Some((path, config)) => Ok((config, ConfigSource::Discovered(path))),
        None => {
            log::debug!(
                "No {} found after checking {} directories. Using built-in defaults.",
                CONFIG_FILE_NAME,
                MAX_TRAVERSAL_DEPTH
            );
            Ok((RewriteConfig::default(), ConfigSource::BuiltIn))
        }
    }
}

/// [`resolve_config`] starting from the process working directory.
pub fn load_config(explicit: Option<&Path>) -> Result<(RewriteConfig, ConfigSource)> {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("Failed to get current directory: {}. Skipping config search.", e);
            if let Some(path) = explicit {
                let config = load_config_from_path(path)?;
                return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
            }
            return Ok((RewriteConfig::default(), ConfigSource::BuiltIn));
        }
    };
    resolve_config(explicit, &current)
}

/// Render a configuration as TOML, the same shape the loader accepts.
pub fn render_config(config: &RewriteConfig) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}
