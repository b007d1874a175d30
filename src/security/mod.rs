//! Message authentication with HMAC-SHA256.
//!
//! # Design Principles
//!
//! 1. **Constant-time verification**: tags are only ever compared through
//!    [`constant_time_eq`]; no early-exit byte comparison touches tag data
//! 2. **Opaque failure**: verification answers `true` or `false` and nothing
//!    else, so callers cannot distinguish a wrong length from a wrong key
//! 3. **No ambient keys**: every operation takes its key explicitly
//!
//! Key management and key derivation are out of scope. Keys are opaque bytes
//! supplied by the caller.
//!
//! # Example
//!
//! ```
//! use authutil::security::{MacTag, check_mac, generate_mac};
//!
//! let tag = generate_mac(b"hello", b"secret");
//! assert_eq!(tag.as_str().len(), 64);
//!
//! // Tags that arrive as text can be parsed first.
//! let received = MacTag::from_hex(tag.as_str()).unwrap();
//! assert!(received.verify(b"hello", b"secret"));
//! assert!(!check_mac(b"hello", received.as_bytes(), b"wrong key"));
//! ```

pub mod compare;
pub mod file;
pub mod mac;
pub mod tag;

pub use compare::constant_time_eq;
pub use file::{check_file_mac, generate_file_mac};
pub use mac::{MacBuilder, check_mac, generate_mac};
pub use tag::{DIGEST_SIZE, MacTag, TAG_HEX_LEN};
