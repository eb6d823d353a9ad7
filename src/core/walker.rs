use tracing::trace;

use crate::platform::native::NativeFileSystem;
use crate::platform::traits::{DirectoryEntryConsumer, DirectoryEnumerator};

/// Collects every non-directory entry below a directory.
///
/// Directories are descended into as soon as the enumerator reports them, so
/// the collected order follows the enumerator's order depth-first. Descent
/// uses the call stack; depth is bounded only by the tree itself.
pub struct TreeWalker<'a, E: DirectoryEnumerator + ?Sized> {
    files: &'a mut Vec<String>,
    enumerator: &'a E,
}

impl<'a, E: DirectoryEnumerator + ?Sized> TreeWalker<'a, E> {
    pub fn new(files: &'a mut Vec<String>, enumerator: &'a E) -> Self {
        Self { files, enumerator }
    }

    /// `path` is expected to be a directory
    pub fn walk(&mut self, path: &str) {
        trace!("Walking directory: {}", path);
        let enumerator = self.enumerator;
        enumerator.for_each_directory_entry(path, self);
    }
}

impl<E: DirectoryEnumerator + ?Sized> DirectoryEntryConsumer for TreeWalker<'_, E> {
    fn consume(&mut self, path: &str, is_directory: bool) {
        if is_directory {
            self.walk(path);
        } else {
            self.files.push(path.to_string());
        }
    }
}

/// Append every file under directory `path` to `result`, using the real filesystem
pub fn get_all_files_under(path: &str, result: &mut Vec<String>) {
    get_all_files_under_with(path, result, &NativeFileSystem::new());
}

/// Same as [`get_all_files_under`] with a caller-supplied enumerator
pub fn get_all_files_under_with<E: DirectoryEnumerator + ?Sized>(
    path: &str,
    result: &mut Vec<String>,
    enumerator: &E,
) {
    TreeWalker::new(result, enumerator).walk(path);
}
