use authutil::security::{MacBuilder, check_mac, generate_mac};
use proptest::prelude::*;

proptest! {
    #[test]
    fn round_trip_verifies(
        message in proptest::collection::vec(any::<u8>(), 0..512),
        key in proptest::collection::vec(any::<u8>(), 0..160),
    ) {
        let tag = generate_mac(&message, &key);
        prop_assert!(check_mac(&message, tag.as_bytes(), &key));
    }

    #[test]
    fn generation_is_deterministic(
        message in proptest::collection::vec(any::<u8>(), 0..256),
        key in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        prop_assert_eq!(generate_mac(&message, &key), generate_mac(&message, &key));
    }

    #[test]
    fn tag_is_lowercase_hex(
        message in proptest::collection::vec(any::<u8>(), 0..256),
        key in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let tag = generate_mac(&message, &key);
        prop_assert_eq!(tag.as_bytes().len(), 64);
        prop_assert!(tag.as_bytes().iter().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
    }

    #[test]
    fn single_bit_flip_in_message_fails(
        message in proptest::collection::vec(any::<u8>(), 1..256),
        key in proptest::collection::vec(any::<u8>(), 0..64),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let tag = generate_mac(&message, &key);
        let mut tampered = message;
        let idx = position.index(tampered.len());
        tampered[idx] ^= 1 << bit;
        prop_assert!(!check_mac(&tampered, tag.as_bytes(), &key));
    }

    #[test]
    fn single_bit_flip_in_tag_fails(
        message in proptest::collection::vec(any::<u8>(), 0..256),
        key in proptest::collection::vec(any::<u8>(), 0..64),
        position in 0usize..64,
        bit in 0u8..8,
    ) {
        let mut tag = *generate_mac(&message, &key).as_bytes();
        tag[position] ^= 1 << bit;
        prop_assert!(!check_mac(&message, &tag, &key));
    }

    #[test]
    fn streaming_matches_one_shot(
        message in proptest::collection::vec(any::<u8>(), 0..512),
        key in proptest::collection::vec(any::<u8>(), 0..64),
        chunk in 1usize..64,
    ) {
        let mut builder = MacBuilder::new(&key);
        for piece in message.chunks(chunk) {
            builder.write(piece);
        }
        prop_assert_eq!(builder.finalize(), generate_mac(&message, &key));
    }
}
