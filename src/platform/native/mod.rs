pub mod file_ops;
pub mod filesystem;
pub mod split;

pub use filesystem::NativeFileSystem;
pub use split::PosixPathSplitter;
