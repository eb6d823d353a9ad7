pub mod models;

pub use models::{load_config, resolve_config_path, LogRotation, ToolConfig};
