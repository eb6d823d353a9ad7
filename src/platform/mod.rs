pub mod native;
pub mod traits;

pub use native::{NativeFileSystem, PosixPathSplitter};
pub use traits::{DirectoryEntryConsumer, DirectoryEnumerator, PathSplitter};
