//! Text sources a [`Filter`](crate::Filter) can read

use crate::error::{ApiError, Result};
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Text to filter, held in memory or read on demand.
///
/// Every source has a name used in error messages and reports: the path for
/// files, the given label for readers, `<text>` and `<bytes>` otherwise.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Text already in memory
    Text(String),
    /// UTF-8 file, read when the filter runs
    File(PathBuf),
    /// UTF-8 encoded bytes
    Bytes(Vec<u8>),
    /// Stream read to the end
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader {
        /// Label shown in errors, such as `<stdin>`
        name: String,
        /// The stream
        reader: Box<dyn Read + Send>,
    },
}

impl Input {
    /// Text already in memory
    pub fn text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// File on disk
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// UTF-8 bytes
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Input::Bytes(bytes.into())
    }

    /// A named stream
    pub fn reader(name: impl Into<String>, reader: impl Read + Send + 'static) -> Self {
        Input::Reader {
            name: name.into(),
            reader: Box::new(reader),
        }
    }

    /// Name of the source for messages and reports
    pub fn name(&self) -> Cow<'_, str> {
        match self {
            Input::Text(_) => Cow::Borrowed("<text>"),
            Input::File(path) => path.to_string_lossy(),
            Input::Bytes(_) => Cow::Borrowed("<bytes>"),
            Input::Reader { name, .. } => Cow::Borrowed(name),
        }
    }

    /// Load the text; read and decoding errors carry the source name
    pub fn read_text(self) -> Result<String> {
        let name = self.name().into_owned();
        let bytes = match self {
            Input::Text(text) => return Ok(text),
            Input::File(path) => fs::read(&path).map_err(|source| ApiError::Read {
                name: name.clone(),
                source,
            })?,
            Input::Bytes(bytes) => bytes,
            Input::Reader { mut reader, .. } => {
                let mut buffer = Vec::new();
                reader
                    .read_to_end(&mut buffer)
                    .map_err(|source| ApiError::Read {
                        name: name.clone(),
                        source,
                    })?;
                buffer
            }
        };

        String::from_utf8(bytes).map_err(|source| ApiError::Encoding { name, source })
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Input").field(&self.name()).finish()
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}
