#![no_main]

use authutil::util::{ByteBuffer, append};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|chunks: Vec<Vec<u8>>| {
    let mut vec = Vec::new();
    let mut buffer = ByteBuffer::new();
    for chunk in &chunks {
        vec = append(vec, chunk);
        buffer = buffer.append(chunk);
        assert!(buffer.capacity() >= buffer.len());
    }
    assert_eq!(vec, chunks.concat());
    assert_eq!(buffer.as_slice(), vec.as_slice());
});
