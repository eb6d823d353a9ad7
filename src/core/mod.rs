pub mod join;
pub mod normalize;
pub mod stream;
pub mod walker;

pub use join::{basename, basename_with, dirname, dirname_with, join_path};
pub use normalize::normalize_path;
pub use stream::{read_from, write_file, write_to, READ_CHUNK_SIZE};
pub use walker::{get_all_files_under, get_all_files_under_with, TreeWalker};
