//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::model::ServerConfig;
use crate::node::{from_json, DocumentError};

/// Error type for configuration loading.
///
/// Only structural failures surface here; a well-formed document always
/// builds a total model, whatever sections it omits.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The text is not valid JSON.
    #[error("parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON does not follow the document encoding.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),
}

/// Load a server configuration from a JSON document file.
pub fn load_config(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Build a server configuration from JSON document text.
pub fn parse_config(text: &str) -> Result<ServerConfig, ConfigError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let root = from_json(&value)?;
    Ok(ServerConfig::from_node(&root))
}
