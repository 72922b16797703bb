//! Configuration loading
//!
//! Reads `~/.config/snipdeck/config.toml`. A missing file yields defaults;
//! an unreadable or invalid file also yields defaults plus a warning that the
//! UI shows once at startup.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, TooltipConfig};

const CONFIG_DIR: &str = "snipdeck";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus a warning when the file had to be ignored
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult::default();
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!("Invalid config, using defaults: {}", e.message())),
        },
    }
}
