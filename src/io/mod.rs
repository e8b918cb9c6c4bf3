pub mod real;
pub mod traits;

pub use real::RealFileSystem;
pub use traits::FileSystem;
