//! Constant-time byte comparison.

use subtle::ConstantTimeEq;

/// Compares two byte strings without leaking where they differ.
///
/// Slices of different lengths compare unequal immediately; only the length
/// is revealed by timing. For equal lengths every byte is examined regardless
/// of where, or whether, a mismatch occurs.
///
/// Authentication tags must only ever be compared through this function.
///
/// # Example
///
/// ```
/// use authutil::security::constant_time_eq;
///
/// assert!(constant_time_eq(b"abc", b"abc"));
/// assert!(!constant_time_eq(b"abc", b"abd"));
/// assert!(!constant_time_eq(b"abc", b"ab"));
/// ```
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
