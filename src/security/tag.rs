//! Hex-encoded MAC tags.
//!
//! A [`MacTag`] is the 32-byte HMAC-SHA256 digest rendered as 64 lowercase
//! hex characters. Equality on tags is constant-time.

use crate::error::TagParseError;
use crate::security::compare::constant_time_eq;
use std::fmt;

/// Size of the raw HMAC-SHA256 digest in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Size of the hex-encoded tag in bytes.
pub const TAG_HEX_LEN: usize = DIGEST_SIZE * 2;

/// A hex-encoded HMAC-SHA256 tag.
#[derive(Clone, Copy)]
pub struct MacTag {
    hex: [u8; TAG_HEX_LEN],
}

impl MacTag {
    /// Encodes a raw digest as a tag.
    ///
    /// # Panics
    ///
    /// Never in practice: the output buffer is exactly twice the digest size.
    #[must_use]
    pub fn from_digest(digest: &[u8; DIGEST_SIZE]) -> Self {
        let mut hex = [0u8; TAG_HEX_LEN];
        hex::encode_to_slice(digest, &mut hex)
            .expect("tag buffer is exactly twice the digest size");
        Self { hex }
    }

    /// Parses a tag from 64 hex characters, either case.
    ///
    /// The result is always stored in canonical lowercase form.
    ///
    /// # Example
    ///
    /// ```
    /// use authutil::security::{MacTag, generate_mac};
    ///
    /// let tag = generate_mac(b"msg", b"key");
    /// let upper = tag.as_str().to_ascii_uppercase();
    /// assert_eq!(MacTag::from_hex(&upper).unwrap(), tag);
    /// assert!(MacTag::from_hex("abc").is_err());
    /// ```
    pub fn from_hex(text: &str) -> Result<Self, TagParseError> {
        if text.len() != TAG_HEX_LEN {
            return Err(TagParseError::Length { actual: text.len() });
        }

        let mut digest = [0u8; DIGEST_SIZE];
        hex::decode_to_slice(text, &mut digest).map_err(|err| match err {
            hex::FromHexError::InvalidHexCharacter { index, .. } => {
                TagParseError::InvalidHex { index }
            }
            _ => TagParseError::Length { actual: text.len() },
        })?;

        Ok(Self::from_digest(&digest))
    }

    /// Returns the 64 hex bytes of the tag.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; TAG_HEX_LEN] {
        &self.hex
    }

    /// Returns the tag as a hex string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ever filled by the hex encoder.
        std::str::from_utf8(&self.hex).unwrap_or_default()
    }

    /// Checks this tag against `message` under `key`.
    #[must_use]
    pub fn verify(&self, message: &[u8], key: &[u8]) -> bool {
        crate::security::check_mac(message, &self.hex, key)
    }
}

impl PartialEq for MacTag {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(&self.hex, &other.hex)
    }
}

impl Eq for MacTag {}

impl AsRef<[u8]> for MacTag {
    fn as_ref(&self) -> &[u8] {
        &self.hex
    }
}

impl fmt::Display for MacTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for MacTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Prefix only, enough to tell tags apart in logs
        write!(f, "MacTag({}...)", &self.as_str()[..8])
    }
}
