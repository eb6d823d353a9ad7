use crate::platform::native::PosixPathSplitter;
use crate::platform::traits::PathSplitter;

/// Join two paths with exactly the separator handling below; no normalization.
///
/// - `""` + `b`        -> `b`
/// - `"foo/"` + `"/bar"` -> `"foo/bar"`
/// - `"foo/"` + `"bar"`  -> `"foo/bar"`
/// - `"foo"` + `"/bar"`  -> `"foo/bar"`
/// - `"foo"` + `"bar"`   -> `"foo/bar"`
///
/// Only one leading `/` of the second path is ever dropped, so
/// `"foo/"` + `"//bar"` keeps a doubled separator for [`normalize_path`]
/// to collapse.
///
/// [`normalize_path`]: crate::core::normalize_path
pub fn join_path(path1: &str, path2: &str) -> String {
    if path1.is_empty() {
        return path2.to_string();
    }

    match (path1.ends_with('/'), path2.strip_prefix('/')) {
        (true, Some(rest)) => format!("{}{}", path1, rest),
        (true, None) => format!("{}{}", path1, path2),
        (false, Some(_)) => format!("{}{}", path1, path2),
        (false, None) => format!("{}/{}", path1, path2),
    }
}

/// Directory part of `path`, as split by the native splitter
pub fn dirname(path: &str) -> String {
    dirname_with(&PosixPathSplitter, path)
}

/// Final element of `path`, as split by the native splitter
pub fn basename(path: &str) -> String {
    basename_with(&PosixPathSplitter, path)
}

pub fn dirname_with<S: PathSplitter + ?Sized>(splitter: &S, path: &str) -> String {
    splitter.split_path(path).0
}

pub fn basename_with<S: PathSplitter + ?Sized>(splitter: &S, path: &str) -> String {
    splitter.split_path(path).1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_empty_first_returns_second_unchanged() {
        assert_eq!(join_path("", "bar"), "bar");
        assert_eq!(join_path("", "/bar"), "/bar");
        assert_eq!(join_path("", ""), "");
    }

    #[test]
    fn test_join_first_with_trailing_separator() {
        assert_eq!(join_path("foo/", "/bar"), "foo/bar");
        assert_eq!(join_path("foo/", "bar"), "foo/bar");
        assert_eq!(join_path("/", "/bar"), "/bar");
    }

    #[test]
    fn test_join_inserts_single_separator() {
        assert_eq!(join_path("foo", "bar"), "foo/bar");
        assert_eq!(join_path("/foo", "bar/baz"), "/foo/bar/baz");
    }

    #[test]
    fn test_join_absolute_second_concatenates_directly() {
        assert_eq!(join_path("foo", "/bar"), "foo/bar");
        assert_eq!(join_path("/foo", "/bar/baz"), "/foo/bar/baz");
    }

    #[test]
    fn test_join_only_strips_one_leading_separator() {
        assert_eq!(join_path("foo/", "//bar"), "foo//bar");
    }

    #[test]
    fn test_join_empty_second() {
        assert_eq!(join_path("foo", ""), "foo/");
        assert_eq!(join_path("foo/", ""), "foo/");
    }

    #[test]
    fn test_dirname_and_basename() {
        assert_eq!(dirname("a/b/c"), "a/b");
        assert_eq!(basename("a/b/c"), "c");

        assert_eq!(dirname("/c"), "/");
        assert_eq!(basename("/c"), "c");

        assert_eq!(dirname("c"), "");
        assert_eq!(basename("c"), "c");
    }

    #[test]
    fn test_dirname_basename_use_supplied_splitter() {
        struct FixedSplitter;

        impl PathSplitter for FixedSplitter {
            fn split_path(&self, _path: &str) -> (String, String) {
                ("left".to_string(), "right".to_string())
            }
        }

        assert_eq!(dirname_with(&FixedSplitter, "anything"), "left");
        assert_eq!(basename_with(&FixedSplitter, "anything"), "right");
    }
}
