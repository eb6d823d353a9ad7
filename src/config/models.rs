use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Config file looked up in the working directory when nothing else is given
pub const DEFAULT_CONFIG_FILE: &str = "pathkit.json";

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "PATHKIT_CONFIG";

#[inline]
fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Tool configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Optional log file directory (if None, only console logging)
    #[serde(default)]
    pub log_directory: Option<PathBuf>,

    /// Log file rotation strategy
    #[serde(default)]
    pub log_rotation: LogRotation,

    /// Byte limit for `cat` when none is given on the command line (0 = no limit)
    #[serde(default)]
    pub read_limit: usize,

    /// Sort the output of `files`
    #[serde(default)]
    pub sort_files: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_directory: None,
            log_rotation: LogRotation::default(),
            read_limit: 0,
            sort_files: false,
        }
    }
}

/// Log file rotation strategy
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LogRotation {
    /// Rotate daily
    #[default]
    Daily,
    /// Rotate hourly
    Hourly,
    /// Never rotate (single file)
    Never,
}

/// Load configuration from `path`; a missing file yields the defaults
pub fn load_config(path: &Path) -> Result<ToolConfig> {
    if !path.exists() {
        return Ok(ToolConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config: ToolConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    Ok(config)
}

/// Explicit path, else `PATHKIT_CONFIG`, else `pathkit.json`
pub fn resolve_config_path(explicit: Option<&str>) -> PathBuf {
    resolve_config_path_from(explicit, std::env::var_os(CONFIG_ENV_VAR))
}

fn resolve_config_path_from(explicit: Option<&str>, env_value: Option<OsString>) -> PathBuf {
    explicit
        .map(PathBuf::from)
        .or_else(|| env_value.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}
