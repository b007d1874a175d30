//! MACs over file contents.

use crate::error::ReadResult;
use crate::fs::read_file;
use crate::security::mac::{check_mac, generate_mac};
use crate::security::tag::MacTag;
use std::path::Path;

/// Computes the tag of the file at `path` under `key`.
pub fn generate_file_mac(path: impl AsRef<Path>, key: &[u8]) -> ReadResult<MacTag> {
    let contents = read_file(path)?;
    Ok(generate_mac(&contents, key))
}

/// Checks `candidate` against the contents of the file at `path`.
///
/// I/O failures are errors; a tag mismatch is `Ok(false)`.
pub fn check_file_mac(path: impl AsRef<Path>, candidate: &[u8], key: &[u8]) -> ReadResult<bool> {
    let contents = read_file(path)?;
    Ok(check_mac(&contents, candidate, key))
}
