//! Reading extraction input from readers and files.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StednavnError};

/// Character encoding of an input text source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum TextEncoding {
    /// UTF-8; invalid sequences are a decoding error
    #[default]
    #[value(name = "utf-8", alias = "utf8")]
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
    /// ISO-8859-1; every byte maps to the code point of the same value
    #[value(name = "latin-1", alias = "latin1", alias = "iso-8859-1")]
    #[serde(rename = "latin-1", alias = "latin1", alias = "iso-8859-1")]
    Latin1,
}

impl TextEncoding {
    /// Decode `bytes` into a string.
    pub fn decode(self, bytes: Vec<u8>) -> Result<String> {
        match self {
            TextEncoding::Utf8 => String::from_utf8(bytes).map_err(|e| {
                StednavnError::decoding(format!(
                    "invalid UTF-8 at byte {}",
                    e.utf8_error().valid_up_to()
                ))
            }),
            TextEncoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }
}

/// Read the full content of `reader` and decode it.
pub fn read_text<R: Read>(mut reader: R, encoding: TextEncoding) -> Result<String> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| StednavnError::source_unavailable("text", e))?;
    encoding.decode(bytes)
}

/// Read and decode a text file.
pub fn read_text_file<P: AsRef<Path>>(path: P, encoding: TextEncoding) -> Result<String> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| StednavnError::source_unavailable(path.display().to_string(), e))?;
    read_text(file, encoding).map_err(|e| match e {
        StednavnError::SourceUnavailable { reason, .. } => {
            StednavnError::source_unavailable(path.display().to_string(), reason)
        }
        StednavnError::Decoding(msg) => {
            StednavnError::decoding(format!("'{}': {msg}", path.display()))
        }
        other => other,
    })
}
