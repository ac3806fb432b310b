//! Configuration file loading
//!
//! Reads `~/.config/typeahead/config.toml`. A missing file means defaults; a
//! malformed one means defaults plus a warning the UI can show.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{Config, PaletteConfig, PickerConfig};

use crate::error::TypeaheadError;

const CONFIG_DIR: &str = "typeahead";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration and an optional warning for the status line
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load from `path`, or from the default location when None
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) => path,
            None => return ConfigResult::default(),
        },
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return ConfigResult::default(),
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Could not read {}: {}", path.display(), e)),
            };
        }
    };

    match parse_config(&contents, path) {
        Ok(config) => {
            log::debug!("loaded config from {}", path.display());
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            log::warn!("{}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

pub fn parse_config(content: &str, path: &Path) -> Result<Config, TypeaheadError> {
    toml::from_str(content).map_err(|e| TypeaheadError::Config {
        path: path.display().to_string(),
        message: e.message().to_string(),
    })
}
