//! Byte buffer utilities.
//!
//! These utilities are intentionally minimal: a single growth policy over
//! `Vec<u8>`, with no global state.

pub mod buffer;

pub use buffer::{ByteBuffer, GROWTH_FACTOR, append};
