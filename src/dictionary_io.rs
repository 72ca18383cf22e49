//*** START FILE: src/dictionary_io.rs ***//
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

use crate::error::LoadError;
use crate::lexicon::normalizer::load_all;
use crate::types::entry::Entry;

/// Reads the raw word records from a JSON file. The top-level value must be
/// a list; its elements are returned untouched for the normalizer.
pub fn read_raw_records(file_path: &Path) -> Result<Vec<Value>, LoadError> {
    let file = File::open(file_path).map_err(|source| LoadError::Io {
        path: file_path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let data: Value = serde_json::from_reader(reader).map_err(|source| LoadError::Parse {
        path: file_path.to_path_buf(),
        source,
    })?;

    match data {
        Value::Array(records) => Ok(records),
        // the browser tool treated a null payload as an empty dictionary
        Value::Null => Ok(Vec::new()),
        _ => Err(LoadError::NotAList {
            path: file_path.to_path_buf(),
        }),
    }
}

/// Loads and normalizes the dictionary in one step. Either every record is
/// read or the whole load fails; there is no partial result.
pub fn load_dictionary(file_path: &Path) -> Result<Vec<Entry>, LoadError> {
    let raw = read_raw_records(file_path)?;
    let entries = load_all(&raw);
    if entries.len() < raw.len() {
        debug!(
            dropped = raw.len() - entries.len(),
            "Dropped records with a blank word"
        );
    }
    info!(
        "Loaded {} word(s) from {}",
        entries.len(),
        file_path.display()
    );
    Ok(entries)
}

//*** END FILE: src/dictionary_io.rs ***//
