//! Authutil: growable byte buffers, chunked file reading, and HMAC-SHA256 tags.
//!
//! # Overview
//!
//! Two independent facilities live in this crate:
//!
//! - **Buffer append**: incremental byte accumulation with amortized doubling.
//!   Appending consumes the buffer and hands back the (possibly reallocated)
//!   one, so a stale reference to the old storage cannot survive a growth.
//! - **MAC service**: HMAC-SHA256 tags, hex-encoded into a fixed 64-byte
//!   representation, verified with a constant-time comparison.
//!
//! The file reader composes buffer append in a fixed-size chunk loop, and the
//! security module offers helpers that authenticate a file's contents.
//!
//! # Module Structure
//!
//! - [`util`]: Byte buffer with the amortized-doubling growth policy
//! - [`fs`]: Chunked whole-file reading
//! - [`security`]: MAC generation, verification, and tag types
//! - [`config`]: Reader configuration (optionally loaded from TOML)
//! - [`error`](mod@error): Error types
//!
//! # Example
//!
//! ```
//! use authutil::security::{check_mac, generate_mac};
//!
//! let tag = generate_mac(b"hello", b"secret");
//! assert_eq!(tag.as_bytes().len(), 64);
//! assert!(check_mac(b"hello", tag.as_bytes(), b"secret"));
//! assert!(!check_mac(b"hallo", tag.as_bytes(), b"secret"));
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod security;
#[cfg(any(test, feature = "test-internals"))]
pub mod test_utils;
pub mod util;

pub use config::ReadConfig;
pub use error::{ConfigError, ReadError, ReadResult, TagParseError};
pub use fs::{FileReader, read_file, read_file_to_string, read_file_with};
pub use security::{MacBuilder, MacTag, check_mac, generate_mac};
pub use util::{ByteBuffer, append};
