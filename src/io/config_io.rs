use std::fs;
use std::path::Path;

use crate::io::paths::config_path;
use crate::model::config::Config;

/// Read `config.toml` from the data directory.
/// A missing or malformed file falls back to the defaults; config problems
/// are never fatal.
pub fn load_config(data_dir: &Path) -> Config {
    read_config(data_dir).unwrap_or_default()
}

fn read_config(data_dir: &Path) -> Option<Config> {
    let content = fs::read_to_string(config_path(data_dir)).ok()?;
    toml::from_str(&content).ok()
}
