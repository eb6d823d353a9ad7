use crate::core::join_path;
use crate::platform::traits::{DirectoryEntryConsumer, DirectoryEnumerator};
use tracing::warn;

/// `std::fs` backed directory enumeration.
///
/// Paths are `&str`, so entries whose names are not valid UTF-8 cannot be
/// reported; they are logged at `warn` and left out.
pub struct NativeFileSystem;

impl NativeFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NativeFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryEnumerator for NativeFileSystem {
    fn for_each_directory_entry(&self, path: &str, consumer: &mut dyn DirectoryEntryConsumer) {
        let entries = match std::fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Cannot read directory {}: {}", path, e);
                return;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Cannot read entry in {}: {}", path, e);
                    continue;
                }
            };

            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                warn!("Skipping non UTF-8 entry in {}: {:?}", path, file_name);
                continue;
            };

            // Entry's own type: a symlink to a directory is not descended into
            let is_directory = match entry.file_type() {
                Ok(file_type) => file_type.is_dir(),
                Err(e) => {
                    warn!("Cannot determine type of {} in {}: {}", name, path, e);
                    continue;
                }
            };

            consumer.consume(&join_path(path, name), is_directory);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(Default)]
    struct Recorder {
        seen: Vec<(String, bool)>,
    }

    impl DirectoryEntryConsumer for Recorder {
        fn consume(&mut self, path: &str, is_directory: bool) {
            self.seen.push((path.to_string(), is_directory));
        }
    }

    fn list(path: &str) -> Vec<(String, bool)> {
        let mut recorder = Recorder::default();
        NativeFileSystem::new().for_each_directory_entry(path, &mut recorder);
        recorder.seen.sort();
        recorder.seen
    }

    #[test]
    fn test_lists_direct_children_only() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("sub").join("deeper")).unwrap();
        std::fs::write(temp.path().join("file.txt"), b"x").unwrap();
        std::fs::write(temp.path().join("sub").join("nested.txt"), b"x").unwrap();

        let root = temp.path().to_str().unwrap();
        let seen = list(root);

        assert_eq!(
            seen,
            vec![
                (format!("{}/file.txt", root), false),
                (format!("{}/sub", root), true),
            ]
        );
    }

    #[test]
    fn test_trailing_separator_not_doubled() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("f"), b"x").unwrap();

        let root = format!("{}/", temp.path().to_str().unwrap());
        let seen = list(&root);

        assert_eq!(seen, vec![(format!("{}f", root), false)]);
    }

    #[test]
    fn test_empty_directory_reports_nothing() {
        let temp = TempDir::new().unwrap();

        assert!(list(temp.path().to_str().unwrap()).is_empty());
    }

    #[test]
    fn test_missing_directory_reports_nothing() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");

        assert!(list(missing.to_str().unwrap()).is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_name_is_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("good"), b"x").unwrap();
        std::fs::write(temp.path().join(OsStr::from_bytes(b"bad\xff")), b"x").unwrap();

        let root = temp.path().to_str().unwrap();
        let seen = list(root);

        assert_eq!(seen, vec![(format!("{}/good", root), false)]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_directory_is_not_a_directory() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("real")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("real"), temp.path().join("link")).unwrap();

        let root = temp.path().to_str().unwrap();
        let seen = list(root);

        assert!(seen.contains(&(format!("{}/link", root), false)));
        assert!(seen.contains(&(format!("{}/real", root), true)));
    }
}
