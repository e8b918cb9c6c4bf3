//! Test support: an in-memory file system and Java fixture helpers.

pub mod helpers;
pub mod mock_env;

pub use helpers::{java_source, ConfigBuilder};
pub use mock_env::MemoryFileSystem;
