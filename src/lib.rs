// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod rewrite;
pub mod testkit;

// Re-export commonly used types
pub use crate::config::{MappingEntry, RewriteConfig};
pub use crate::errors::{Error, Result};
pub use crate::io::{FileSystem, RealFileSystem};
pub use crate::rewrite::{
    process_directory, run, update_package_declaration, ConsoleReporter, DirectoryOutcome,
    PackagePattern, Reporter, RunMode, RunSummary,
};
