//! Request body loading utilities.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

/// Path that reads the body from stdin.
pub const STDIN_PATH: &str = "-";

/// Error type for request loading.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Invalid JSON input: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Invalid YAML input: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
    #[error("Provide data with --file or --data")]
    NoData,
}

/// Loads a request body from a file or an inline JSON string.
///
/// The file wins when both are given. Returns `None` when neither is.
pub fn load_body(file: Option<&str>, data: Option<&str>) -> Result<Option<Value>, RequestError> {
    if let Some(path) = file {
        return load_file(path).map(Some);
    }
    match data {
        Some(json) => Ok(Some(serde_json::from_str(json)?)),
        None => Ok(None),
    }
}

/// Like [`load_body`], but fails with [`RequestError::NoData`] when no
/// source is given.
pub fn require_body(file: Option<&str>, data: Option<&str>) -> Result<Value, RequestError> {
    load_body(file, data)?.ok_or(RequestError::NoData)
}

/// Loads a request body from a file, or stdin when `path` is `-`.
pub fn load_file(path: &str) -> Result<Value, RequestError> {
    let read_err = |source| RequestError::ReadFile {
        path: path.to_string(),
        source,
    };

    if path == STDIN_PATH {
        let mut data = Vec::new();
        io::stdin().read_to_end(&mut data).map_err(read_err)?;
        return Ok(serde_json::from_slice(&data)?);
    }

    let data = fs::read(path).map_err(read_err)?;
    parse_request(&data, path)
}

/// Parses request data based on file extension: YAML for `.yaml`/`.yml`,
/// JSON otherwise.
pub fn parse_request(data: &[u8], path: impl AsRef<Path>) -> Result<Value, RequestError> {
    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match ext.as_deref() {
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_slice(data)?),
        _ => Ok(serde_json::from_slice(data)?),
    }
}
