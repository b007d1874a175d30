//! Chunked read loop over files and arbitrary readers.

use crate::config::ReadConfig;
use crate::error::{ConfigError, ReadError, ReadResult};
use crate::util::ByteBuffer;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads `reader` to end-of-stream in `chunk_size` pieces.
///
/// Each successful read is appended to a growing buffer. A read of zero
/// bytes is end-of-stream and ends the loop normally. Interrupted reads are
/// retried. Any other error is returned as-is.
///
/// # Errors
///
/// Returns [`io::ErrorKind::InvalidInput`] if `chunk_size` is zero, or the
/// first non-interrupt error produced by `reader`.
///
/// # Example
///
/// ```
/// use authutil::fs::read_to_end_chunked;
///
/// let data = read_to_end_chunked(&b"hello chunked world"[..], 4).unwrap();
/// assert_eq!(data, b"hello chunked world");
/// ```
pub fn read_to_end_chunked<R: Read>(reader: R, chunk_size: usize) -> io::Result<Vec<u8>> {
    read_chunks(reader, chunk_size).map(ByteBuffer::into_vec)
}

fn read_chunks<R: Read>(mut reader: R, chunk_size: usize) -> io::Result<ByteBuffer> {
    if chunk_size == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "chunk size must be non-zero",
        ));
    }

    let mut chunk = vec![0u8; chunk_size];
    let mut buffer = ByteBuffer::new();

    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => buffer = buffer.append(&chunk[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }

    Ok(buffer)
}

/// Reads whole files into memory using a configured chunk size.
///
/// # Example
///
/// ```no_run
/// use authutil::{FileReader, ReadConfig};
///
/// let reader = FileReader::new(ReadConfig::default().with_chunk_size(4096))?;
/// let bytes = reader.read("Cargo.toml")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileReader {
    config: ReadConfig,
}

impl FileReader {
    /// Creates a reader, rejecting configurations that cannot make progress.
    pub fn new(config: ReadConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the reader's configuration.
    #[must_use]
    pub const fn config(&self) -> &ReadConfig {
        &self.config
    }

    /// Reads the entire file at `path`.
    ///
    /// The file is closed before this returns, whether the read succeeded or
    /// failed partway through.
    pub fn read(&self, path: impl AsRef<Path>) -> ReadResult<Vec<u8>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            #[cfg(feature = "tracing-integration")]
            tracing::debug!(path = %path.display(), error = %source, "open failed");
            ReadError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;

        match read_chunks(file, self.config.chunk_size) {
            Ok(buffer) => {
                #[cfg(feature = "tracing-integration")]
                tracing::debug!(
                    path = %path.display(),
                    bytes = buffer.len(),
                    chunk_size = self.config.chunk_size,
                    growths = buffer.growths(),
                    "file read complete"
                );
                Ok(buffer.into_vec())
            }
            Err(source) => {
                #[cfg(feature = "tracing-integration")]
                tracing::debug!(path = %path.display(), error = %source, "read failed");
                Err(ReadError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    /// Reads the entire file at `path` and decodes it as UTF-8.
    pub fn read_to_string(&self, path: impl AsRef<Path>) -> ReadResult<String> {
        let path = path.as_ref();
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|source| ReadError::InvalidUtf8 {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Reads the entire file at `path` with the default chunk size.
pub fn read_file(path: impl AsRef<Path>) -> ReadResult<Vec<u8>> {
    FileReader::default().read(path)
}

/// Reads the entire file at `path` as UTF-8 text with the default chunk size.
pub fn read_file_to_string(path: impl AsRef<Path>) -> ReadResult<String> {
    FileReader::default().read_to_string(path)
}

/// Reads the entire file at `path` using `config`.
///
/// The configuration is checked before the file is opened; a rejected one is
/// reported as [`ReadError::Config`].
///
/// # Example
///
/// ```
/// use authutil::{ReadConfig, ReadError, read_file_with};
///
/// let err = read_file_with("Cargo.toml", ReadConfig::default().with_chunk_size(0)).unwrap_err();
/// assert!(matches!(err, ReadError::Config(_)));
/// ```
pub fn read_file_with(path: impl AsRef<Path>, config: ReadConfig) -> ReadResult<Vec<u8>> {
    FileReader::new(config)?.read(path)
}
