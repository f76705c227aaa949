//! Script input loading
//!
//! Reads script text from files or stdin, enforcing UTF-8 and a size limit
//! before anything reaches the scanner.

use crate::error::{Error, Result};

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Name used for stdin in reports
pub const STDIN_NAME: &str = "<stdin>";

/// A decoded script ready to scan
#[derive(Debug, Clone)]
pub struct ScriptInput {
    /// Where the text came from (path or `<stdin>`)
    pub name: String,

    /// Decoded script text
    pub text: String,
}

impl ScriptInput {
    /// Wrap text that is already in memory
    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Load from a file path
    pub fn from_path(path: &Path, max_bytes: u64) -> Result<Self> {
        let name = path.display().to_string();
        let file = File::open(path).map_err(|source| Error::Io {
            name: name.clone(),
            source,
        })?;
        Self::from_reader(name, file, max_bytes)
    }

    /// Load from any reader, reading at most `max_bytes`
    pub fn from_reader<R: Read>(name: impl Into<String>, reader: R, max_bytes: u64) -> Result<Self> {
        let name = name.into();
        let mut buf = Vec::new();

        // One byte past the limit tells "exactly at limit" from "over"
        reader
            .take(max_bytes.saturating_add(1))
            .read_to_end(&mut buf)
            .map_err(|source| Error::Io {
                name: name.clone(),
                source,
            })?;

        if buf.len() as u64 > max_bytes {
            return Err(Error::TooLarge {
                name,
                limit: max_bytes,
            });
        }

        let text = String::from_utf8(buf).map_err(|source| Error::Encoding {
            name: name.clone(),
            source,
        })?;

        Ok(Self { name, text })
    }

    /// Check if there is nothing to scan
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
