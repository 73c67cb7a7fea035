//! Configuration paths
//!
//! Uses the directories crate for platform-appropriate locations:
//! - Linux: `$XDG_CONFIG_HOME/debug-example/` (usually `~/.config/debug-example/`)
//! - macOS: `~/Library/Application Support/debug-example/`
//! - Windows: `%APPDATA%\debug-example\config\`

use std::path::PathBuf;

/// Application name used for the config directory
const APP_NAME: &str = "debug-example";

/// Name of the config file inside the config directory
const CONFIG_FILE: &str = "config.toml";

/// Get the configuration directory path
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}
