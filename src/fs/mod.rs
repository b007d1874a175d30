//! Whole-file reading.
//!
//! Files are read in fixed-size chunks, each appended to a
//! [`ByteBuffer`](crate::util::ByteBuffer). The file handle is owned by the
//! read call and closed on drop, so it is released on every exit path.

pub mod read;

pub use read::{FileReader, read_file, read_file_to_string, read_file_with, read_to_end_chunked};
