//! Error types.
//!
//! Buffer append and MAC generation have no error path, and MAC verification
//! reports every failure as a plain `false`. The only fallible surfaces are
//! file reading, reader configuration, and parsing a tag from text.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// An error from reading a file into memory.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The reader configuration was rejected before any I/O happened.
    #[error("invalid reader configuration")]
    Config(#[from] ConfigError),

    /// The file could not be opened.
    #[error("failed to open `{}`", path.display())]
    Open {
        /// Path that was being opened.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A read failed after the file was opened.
    ///
    /// End-of-stream is never reported through this variant.
    #[error("failed to read `{}`", path.display())]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The file was read but its contents are not valid UTF-8.
    #[error("`{}` is not valid UTF-8", path.display())]
    InvalidUtf8 {
        /// Path that was read.
        path: PathBuf,
        /// Decoding failure.
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl ReadError {
    /// Returns the path involved in the failure, if the error carries one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Config(_) => None,
            Self::Open { path, .. } | Self::Read { path, .. } | Self::InvalidUtf8 { path, .. } => {
                Some(path)
            }
        }
    }

    /// Returns the I/O error kind for open and read failures.
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Open { source, .. } | Self::Read { source, .. } => Some(source.kind()),
            Self::Config(_) | Self::InvalidUtf8 { .. } => None,
        }
    }

    /// Returns `true` if the file did not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Open { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Result type for file reading operations.
pub type ReadResult<T> = Result<T, ReadError>;

/// An error from building or loading a [`ReadConfig`](crate::ReadConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A chunk size of zero can never make progress.
    #[error("chunk size must be non-zero")]
    ZeroChunkSize,

    /// The config file could not be read.
    #[error("failed to read config file `{}`", path.display())]
    Io {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The config text is not valid TOML for a reader configuration.
    #[cfg(feature = "config-file")]
    #[error("failed to parse reader config")]
    Parse(#[from] toml::de::Error),
}

/// An error from parsing a [`MacTag`](crate::MacTag) out of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TagParseError {
    /// The text is not exactly 64 characters long.
    #[error("expected a 64-character hex tag, got {actual} characters")]
    Length {
        /// Length of the rejected input.
        actual: usize,
    },

    /// The text contains a character outside `0-9a-fA-F`.
    #[error("invalid hex character at index {index}")]
    InvalidHex {
        /// Byte offset of the offending character.
        index: usize,
    },
}
