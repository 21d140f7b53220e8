//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "advtable";
const APPLICATION: &str = "advtable";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for logs.
///
/// - Linux: `$XDG_CACHE_HOME/advtable` or `~/.cache/advtable`
/// - macOS: `~/Library/Caches/dev.advtable.advtable`
/// - Windows: `C:\Users\<User>\AppData\Local\advtable\advtable\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/advtable` or `~/.config/advtable`
/// - macOS: `~/Library/Application Support/dev.advtable.advtable`
/// - Windows: `C:\Users\<User>\AppData\Roaming\advtable\advtable\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the default table config.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("table.json"))
}

/// Get the path to the log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("advtable.log"))
}
