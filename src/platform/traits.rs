/// Receives one notification per entry discovered while enumerating a directory
pub trait DirectoryEntryConsumer {
    fn consume(&mut self, path: &str, is_directory: bool);
}

/// Directory listing abstraction
pub trait DirectoryEnumerator {
    /// Call `consumer.consume(child_path, is_directory)` exactly once for
    /// every direct child of `path`. Order is whatever the platform yields.
    fn for_each_directory_entry(&self, path: &str, consumer: &mut dyn DirectoryEntryConsumer);
}

/// Splits a path into its directory part and its final element
pub trait PathSplitter {
    fn split_path(&self, path: &str) -> (String, String);
}
