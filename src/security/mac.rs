//! HMAC-SHA256 generation and verification.
//!
//! ```text
//! tag      = hex_lower(HMAC-SHA256(key, message))        // 64 bytes
//! verified = constant_time_eq(tag, candidate)
//! ```
//!
//! Keys are opaque: any length is accepted, including empty. Verification
//! never errors. A wrong length, wrong content, and wrong key all look the
//! same to the caller: `false`.

use crate::security::compare::constant_time_eq;
use crate::security::tag::{DIGEST_SIZE, MacTag};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Incremental HMAC-SHA256 over a message delivered in pieces.
///
/// Feeding the same bytes in any split produces the same tag as
/// [`generate_mac`] over their concatenation.
///
/// # Example
///
/// ```
/// use authutil::security::{MacBuilder, generate_mac};
///
/// let streamed = MacBuilder::new(b"key").update(b"hel").update(b"lo").finalize();
/// assert_eq!(streamed, generate_mac(b"hello", b"key"));
/// ```
#[derive(Clone)]
pub struct MacBuilder {
    mac: HmacSha256,
}

impl MacBuilder {
    /// Starts a MAC computation keyed by `key`.
    ///
    /// # Panics
    ///
    /// Never in practice: HMAC accepts keys of any length, including empty.
    #[must_use]
    pub fn new(key: &[u8]) -> Self {
        let mac = <HmacSha256 as KeyInit>::new_from_slice(key)
            .expect("HMAC accepts keys of any length");
        Self { mac }
    }

    /// Feeds more message bytes.
    #[must_use]
    pub fn update(mut self, data: &[u8]) -> Self {
        self.mac.update(data);
        self
    }

    /// Feeds more message bytes through a mutable reference.
    pub fn write(&mut self, data: &[u8]) {
        self.mac.update(data);
    }

    /// Finishes the computation and hex-encodes the digest.
    #[must_use]
    pub fn finalize(self) -> MacTag {
        let mut digest = [0u8; DIGEST_SIZE];
        digest.copy_from_slice(&self.mac.finalize().into_bytes());
        MacTag::from_digest(&digest)
    }
}

impl fmt::Debug for MacBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MacBuilder").finish_non_exhaustive()
    }
}

/// Computes the hex-encoded HMAC-SHA256 tag of `message` under `key`.
///
/// Deterministic and infallible for every input, including empty message and
/// empty key.
///
/// # Example
///
/// ```
/// use authutil::security::generate_mac;
///
/// let tag = generate_mac(b"", b"");
/// assert_eq!(
///     tag.as_str(),
///     "b613679a0814d9ec772f95d778c35fc5ff1697c493715653c6c712144292c5ad"
/// );
/// ```
#[must_use]
pub fn generate_mac(message: &[u8], key: &[u8]) -> MacTag {
    MacBuilder::new(key).update(message).finalize()
}

/// Returns `true` iff `candidate` is the tag of `message` under `key`.
///
/// The expected tag is recomputed and compared in constant time. Candidates
/// of the wrong length are rejected without inspecting their content.
///
/// # Example
///
/// ```
/// use authutil::security::{check_mac, generate_mac};
///
/// let tag = generate_mac(b"hello", b"secret");
/// assert!(check_mac(b"hello", tag.as_bytes(), b"secret"));
/// assert!(!check_mac(b"hallo", tag.as_bytes(), b"secret"));
/// assert!(!check_mac(b"hello", tag.as_bytes(), b"secre5"));
/// ```
#[must_use]
pub fn check_mac(message: &[u8], candidate: &[u8], key: &[u8]) -> bool {
    let expected = generate_mac(message, key);
    let verified = constant_time_eq(expected.as_bytes(), candidate);

    #[cfg(feature = "tracing-integration")]
    {
        if !verified {
            tracing::debug!(
                message_len = message.len(),
                candidate_len = candidate.len(),
                "MAC verification failed"
            );
        }
    }

    verified
}
