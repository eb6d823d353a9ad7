use crate::platform::traits::PathSplitter;

/// Splits at the last `/`, keeping a lone leading `/` as the directory part
pub struct PosixPathSplitter;

impl PathSplitter for PosixPathSplitter {
    fn split_path(&self, path: &str) -> (String, String) {
        match path.rfind('/') {
            None => (String::new(), path.to_string()),
            Some(0) => ("/".to_string(), path[1..].to_string()),
            Some(pos) => (path[..pos].to_string(), path[pos + 1..].to_string()),
        }
    }
}
