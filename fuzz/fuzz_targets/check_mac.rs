#![no_main]

use arbitrary::Arbitrary;
use authutil::security::{MacTag, check_mac, generate_mac};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    message: &'a [u8],
    key: &'a [u8],
    candidate: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    let tag = generate_mac(input.message, input.key);
    assert!(check_mac(input.message, tag.as_bytes(), input.key));

    // An arbitrary candidate verifies only if it is byte-identical to the tag.
    let verified = check_mac(input.message, input.candidate, input.key);
    assert_eq!(verified, input.candidate == tag.as_bytes());

    if let Ok(text) = std::str::from_utf8(input.candidate) {
        if let Ok(parsed) = MacTag::from_hex(text) {
            assert_eq!(parsed.as_str(), text.to_ascii_lowercase());
        }
    }
});
