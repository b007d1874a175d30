//! Growable byte buffer with amortized doubling.
//!
//! Appending `N` bytes to a buffer of length `L` and capacity `C`:
//!
//! ```text
//! L + N <= C  →  write in place, no reallocation
//! L + N >  C  →  allocate 2 × (L + N), copy the L old bytes, then write
//! ```
//!
//! Doubling the *required* size (not the old capacity) leaves headroom so that
//! a long run of small appends costs O(1) amortized per byte.
//!
//! Both [`append`] and [`ByteBuffer::append`] take the buffer by value and
//! return it. After a reallocation the old storage is gone, so the returned
//! buffer is the only valid handle; the move makes that impossible to get
//! wrong.
//!
//! Allocation failure aborts through the global allocator. Data is never
//! silently truncated.

use std::ops::Deref;

/// Multiplier applied to the required length when the buffer must grow.
pub const GROWTH_FACTOR: usize = 2;

/// Appends `chunk` to `buffer`, growing the storage to twice the required
/// length when the current capacity is insufficient.
///
/// # Example
///
/// ```
/// use authutil::util::append;
///
/// let buf = append(Vec::new(), b"abc");
/// assert_eq!(buf, b"abc");
/// assert!(buf.capacity() >= 6);
///
/// let buf = append(buf, b"de");
/// assert_eq!(buf, b"abcde");
/// ```
#[must_use = "append may reallocate; the returned buffer replaces the one passed in"]
pub fn append(buffer: Vec<u8>, chunk: &[u8]) -> Vec<u8> {
    append_tracked(buffer, chunk).0
}

/// Appends and reports whether the storage was reallocated.
fn append_tracked(mut buffer: Vec<u8>, chunk: &[u8]) -> (Vec<u8>, bool) {
    if chunk.is_empty() {
        return (buffer, false);
    }

    let required = buffer.len() + chunk.len();
    let grew = required > buffer.capacity();
    if grew {
        let mut grown = Vec::with_capacity(required.saturating_mul(GROWTH_FACTOR));

        #[cfg(feature = "tracing-integration")]
        tracing::trace!(
            old_capacity = buffer.capacity(),
            new_capacity = grown.capacity(),
            len = buffer.len(),
            "byte buffer reallocated"
        );

        grown.extend_from_slice(&buffer);
        buffer = grown;
    }

    // Capacity is sufficient here; this never reallocates.
    buffer.extend_from_slice(chunk);
    (buffer, grew)
}

/// An owned byte buffer that grows by amortized doubling.
///
/// `ByteBuffer` keeps count of how many reallocations it has performed, which
/// makes the growth policy observable.
///
/// # Example
///
/// ```
/// use authutil::util::ByteBuffer;
///
/// let mut buf = ByteBuffer::new();
/// for chunk in [&b"he"[..], b"llo", b" ", b"world"] {
///     buf = buf.append(chunk);
/// }
/// assert_eq!(buf.as_slice(), b"hello world");
/// assert!(buf.capacity() >= buf.len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
    growths: usize,
}

impl ByteBuffer {
    /// Creates an empty buffer with zero capacity.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: Vec::new(),
            growths: 0,
        }
    }

    /// Creates an empty buffer with at least the given capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            growths: 0,
        }
    }

    /// Appends `chunk`, returning the buffer that now owns the data.
    #[must_use = "append may reallocate; the returned buffer replaces the one passed in"]
    pub fn append(self, chunk: &[u8]) -> Self {
        let (bytes, grew) = append_tracked(self.bytes, chunk);
        Self {
            bytes,
            growths: self.growths + usize::from(grew),
        }
    }

    /// Logical length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if no bytes have been written.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Physical capacity of the backing storage.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// Number of reallocations this buffer has performed.
    #[must_use]
    pub const fn growths(&self) -> usize {
        self.growths
    }

    /// Returns the written bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the buffer, returning the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

/// Buffers are equal when their bytes are; capacity and history are ignored.
impl PartialEq for ByteBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for ByteBuffer {}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes, growths: 0 }
    }
}

impl From<ByteBuffer> for Vec<u8> {
    fn from(buffer: ByteBuffer) -> Self {
        buffer.bytes
    }
}

impl Deref for ByteBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
