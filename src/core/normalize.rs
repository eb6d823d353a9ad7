const SEPARATOR: char = '/';
const CURRENT_DIR: &str = ".";
const PARENT_DIR: &str = "..";

/// Resolve `.` and `..` segments and collapse repeated separators.
///
/// Purely lexical: the filesystem is never consulted. A `..` with nothing
/// left to pop is dropped, so `"/.."` becomes `"/"` and `"a/../../b"`
/// becomes `"b"`. A leading `/` survives if and only if the input had one,
/// and no trailing `/` is emitted unless the whole result is `/`.
pub fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split(SEPARATOR).filter(|s| !s.is_empty()) {
        match segment {
            PARENT_DIR => {
                segments.pop();
            }
            CURRENT_DIR => {}
            other => segments.push(other),
        }
    }

    let absolute = path.starts_with(SEPARATOR);

    // "/" and degenerate forms of it, e.g. "/.." or "//./"
    if segments.is_empty() && absolute {
        return SEPARATOR.to_string();
    }

    let joined = segments.join("/");
    if absolute {
        format!("/{}", joined)
    } else {
        joined
    }
}
