use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::ConfigError;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub dictionary_path: PathBuf,
    pub window: WindowConfig,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from("dictionary.json"),
            window: WindowConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 760.0,
        }
    }
}

/// Reads `config.toml`. A missing file is not an error and yields the
/// defaults; an unreadable or malformed one is.
pub fn load_config_from_file(file_path: &Path) -> Result<Config, ConfigError> {
    let contents = match fs::read_to_string(file_path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No {} found, using default configuration", file_path.display());
            return Ok(Config::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: file_path.to_path_buf(),
                source,
            })
        }
    };

    toml::from_str::<Config>(&contents).map_err(|source| ConfigError::Parse {
        path: file_path.to_path_buf(),
        source,
    })
}
