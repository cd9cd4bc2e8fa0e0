// src/infra/paths.rs — Config and data directory layout
//
// All paths respect the STOVETOP_HOME environment variable for isolation.
// When STOVETOP_HOME is set, config and data live under that directory.
// When unset, config uses ~/.stovetop/ and data uses XDG_DATA_HOME/stovetop.

use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

/// Returns the STOVETOP_HOME override, if set.
fn stovetop_home() -> Option<PathBuf> {
    std::env::var_os("STOVETOP_HOME").map(PathBuf::from)
}

/// Home directory, or the working directory when none can be determined.
pub fn dirs_home() -> PathBuf {
    BaseDirs::new()
        .map(|b| b.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Configuration directory: $STOVETOP_HOME/ or ~/.stovetop/
pub fn config_dir() -> PathBuf {
    if let Some(home) = stovetop_home() {
        return home;
    }
    dirs_home().join(".stovetop")
}

/// Data directory: $STOVETOP_HOME/data/ or ~/.local/share/stovetop/
pub fn data_dir() -> PathBuf {
    if let Some(home) = stovetop_home() {
        return home.join("data");
    }
    ProjectDirs::from("", "", "stovetop")
        .map(|p| p.data_local_dir().to_path_buf())
        .unwrap_or_else(|| config_dir().join("data"))
}

/// Database path
pub fn db_path() -> PathBuf {
    data_dir().join("stovetop.db")
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}
