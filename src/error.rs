//! Error types for privscan
//!
//! Scanning itself never fails; these cover loading input and config and
//! rendering reports.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{name} is not valid UTF-8: {source}")]
    Encoding {
        name: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("{name} exceeds the input limit of {limit} bytes")]
    TooLarge { name: String, limit: u64 },

    #[error("failed to parse config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown output format '{0}' (expected text or json)")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
