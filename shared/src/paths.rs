//! Per-user data locations shared by dhub tools

use directories::ProjectDirs;
use std::path::PathBuf;

/// Get the application data directory, if the platform has one.
/// Does not create it.
pub fn data_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "dhub", "dhub").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Get the path of the default config file
pub fn config_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("config.toml"))
}
