//! Reader configuration.
//!
//! The only tunable is the size of each read issued against the file. It
//! affects how many read calls are made, never the bytes produced.
//!
//! With the `config-file` feature enabled, a [`ReadConfig`] can be loaded from
//! TOML:
//!
//! ```toml
//! chunk_size = 4096
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
#[cfg(feature = "config-file")]
use std::path::Path;

/// Default number of bytes requested per read.
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// Configuration for [`FileReader`](crate::FileReader).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReadConfig {
    /// Bytes requested per read call. Must be non-zero.
    pub chunk_size: usize,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl ReadConfig {
    /// Sets the per-read chunk size.
    #[must_use]
    pub const fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Checks that the configuration can make progress.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        Ok(())
    }

    /// Parses and validates a configuration from TOML text.
    ///
    /// Missing keys fall back to their defaults.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration from a TOML file.
    #[cfg(feature = "config-file")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
