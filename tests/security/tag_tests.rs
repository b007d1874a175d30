use authutil::TagParseError;
use authutil::security::{MacTag, TAG_HEX_LEN, generate_mac};

#[test]
fn display_round_trips_through_from_hex() {
    let tag = generate_mac(b"round trip", b"key");
    let parsed = MacTag::from_hex(&tag.to_string()).unwrap();
    assert_eq!(parsed, tag);
    assert_eq!(parsed.as_bytes(), tag.as_bytes());
}

#[test]
fn from_hex_rejects_truncated_tag() {
    let tag = generate_mac(b"m", b"k");
    let truncated = &tag.as_str()[..TAG_HEX_LEN - 2];
    assert_eq!(
        MacTag::from_hex(truncated),
        Err(TagParseError::Length {
            actual: TAG_HEX_LEN - 2
        })
    );
}

#[test]
fn from_hex_rejects_multibyte_characters() {
    // 62 ASCII bytes + one two-byte character = 64 bytes, not valid hex.
    let text = format!("{}é", "a".repeat(TAG_HEX_LEN - 2));
    assert_eq!(text.len(), TAG_HEX_LEN);
    assert!(matches!(
        MacTag::from_hex(&text),
        Err(TagParseError::InvalidHex { index }) if index >= TAG_HEX_LEN - 2
    ));
}

#[test]
fn tag_verify_uses_message_and_key() {
    let tag = generate_mac(b"message", b"key");
    assert!(tag.verify(b"message", b"key"));
    assert!(!tag.verify(b"message!", b"key"));
    assert!(!tag.verify(b"message", b"key!"));
}

#[test]
fn debug_does_not_leak_full_tag() {
    let tag = generate_mac(b"message", b"key");
    let debug = format!("{tag:?}");
    assert!(debug.starts_with("MacTag("));
    assert!(debug.len() < TAG_HEX_LEN);
}
