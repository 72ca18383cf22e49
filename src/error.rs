//! Error types for loading the dictionary and the configuration.

use std::path::PathBuf;
use thiserror::Error;

/// The dictionary could not be retrieved or parsed. Shown to the user once
/// per load attempt; the catalog stays empty.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to load {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} does not contain a list of word records", path.display())]
    NotAList { path: PathBuf },

    #[error("Dictionary loader stopped before finishing")]
    Interrupted,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
