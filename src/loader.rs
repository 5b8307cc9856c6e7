//! Reading input files from disk, optionally handing them to a parser.
//!
//! Every input of the pipeline (template, `api_data.json`, `api_project.json`
//! and the prepend text) goes through [`read`] or [`read_parse`], so read and
//! parse failures are always reported against the path that caused them.

use crate::error::{Error, ParseSource, Result};
use log::debug;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Reads a file as UTF-8 text.
pub fn read(path: &Path) -> Result<String> {
    debug!("Reading file: {}", path.display());

    std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a file as UTF-8 text and runs `parse` over its content.
pub fn read_parse<T, E, F>(path: &Path, parse: F) -> Result<T>
where
    F: FnOnce(&str) -> std::result::Result<T, E>,
    E: Into<ParseSource>,
{
    let content = read(path)?;

    parse(&content).map_err(|err| Error::Parse {
        path: path.to_path_buf(),
        source: err.into(),
    })
}

/// Reads a file and deserializes it as JSON.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    read_parse(path, |content| serde_json::from_str::<T>(content))
}
