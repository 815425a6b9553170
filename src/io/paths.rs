use std::env;
use std::path::{Path, PathBuf};

/// File name of the task list inside the data directory.
pub const TASKS_FILE: &str = "tasks.json";

/// File name of the optional user config inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Resolve the data directory: explicit `-C` override, then `$LIFT_DIR`,
/// then `~/.lift`.
pub fn resolve_data_dir(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }
    if let Some(dir) = env::var_os("LIFT_DIR") {
        return PathBuf::from(dir);
    }
    dirs_home().join(".lift")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

pub fn tasks_path(data_dir: &Path) -> PathBuf {
    data_dir.join(TASKS_FILE)
}

pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE)
}
