use static_uint::word::{WORD_BYTES, Word};
use static_uint::{U256, U512};

#[test]
fn big_endian_view_places_the_value_last() {
    let value = U256::from_word(0xAB);
    let view = value.big_endian_bytes();

    assert_eq!(view.len(), 32);
    assert!(!view.is_empty());
    assert_eq!(view.get(31), Some(0xAB));
    assert_eq!(view.get(0), Some(0));
    assert_eq!(view.get(32), None);
}

#[test]
fn little_endian_view_is_the_exact_reverse() {
    let value = U256::from(0x0123_4567_89AB_CDEFu64);

    let big: Vec<u8> = value.big_endian_bytes().iter().collect();
    let little: Vec<u8> = value.little_endian_bytes().iter().collect();

    let mut reversed = big.clone();
    reversed.reverse();
    assert_eq!(little, reversed);

    let back: Vec<u8> = value.big_endian_bytes().iter().rev().collect();
    assert_eq!(back, little);
}

#[test]
fn views_are_restartable_and_sized() {
    let value = U256::from_word(7);
    let view = value.big_endian_bytes();

    let first: Vec<u8> = view.iter().collect();
    let second: Vec<u8> = view.iter().collect();
    assert_eq!(first, second);

    let mut iter = view.iter();
    assert_eq!(iter.len(), 32);
    iter.next();
    assert_eq!(iter.len(), 31);
}

#[test]
fn random_access_agrees_with_iteration() {
    let value = U512::from(0xDEAD_BEEF_CAFE_F00Du64) + (U512::ONE << 300);

    for order in [value.big_endian_bytes(), value.little_endian_bytes()] {
        let collected: Vec<u8> = order.iter().collect();
        for (i, &byte) in collected.iter().enumerate() {
            assert_eq!(order.get(i), Some(byte));
        }
    }
}

#[test]
fn byte_positions_follow_significance_not_memory() {
    let value = U256::ONE << 8;
    let view = value.big_endian_bytes();

    // The second-to-last big-endian byte holds bit 8 regardless of the
    // host byte order.
    assert_eq!(view.get(30), Some(1));
    assert_eq!(view.get(31), Some(0));

    assert_eq!(value.little_endian_bytes().get(1), Some(1));
}

#[test]
fn decoding_reads_the_first_byte_as_most_significant() {
    let value = U256::from_be_slice(&[0x01, 0x02]).unwrap();
    assert_eq!(value, U256::from_word(0x0102));

    let empty = U256::from_be_slice(&[]).unwrap();
    assert_eq!(empty, U256::ZERO);
}

#[test]
fn decoding_zero_extends_short_input() {
    let short = U256::from_be_slice(&[0xAB]).unwrap();
    assert_eq!(short, U256::from_word(0xAB));

    let mut padded = [0u8; 32];
    padded[31] = 0xAB;
    assert_eq!(U256::from_be_slice(&padded).unwrap(), short);
}

#[test]
fn decoding_rejects_oversized_input() {
    let err = U512::from_be_slice(&[1u8; 65]).unwrap_err();

    assert_eq!(err.len, 65);
    assert_eq!(err.capacity, 64);

    let message = format!("{}", err);
    assert!(message.contains("65"));
    assert!(message.contains("64"));

    // Length is what is validated; an all-zero oversized input is still
    // an error rather than a silently ignored prefix.
    assert!(U512::from_be_slice(&[0u8; 65]).is_err());
}

#[test]
fn decoding_accepts_input_at_full_capacity() {
    assert_eq!(U256::from_be_slice(&[0xFF; 32]).unwrap(), U256::MAX);
}

#[test]
fn encoding_and_decoding_round_trip() {
    let mut bytes = [0u8; 32];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = i as u8;
    }

    let value = U256::from_be_slice(&bytes).unwrap();
    let encoded: Vec<u8> = value.big_endian_bytes().iter().collect();

    assert_eq!(encoded, bytes);
}

#[test]
fn decoding_works_in_const_context() {
    const DECODED: U256 = match U256::from_be_slice(&[0x01, 0x02]) {
        Ok(value) => value,
        Err(_) => U256::ZERO,
    };

    assert_eq!(DECODED, U256::from_word(0x0102));
}

#[test]
fn additions_are_visible_through_the_byte_view() {
    // A 512-bit value whose 56th big-endian byte is 1 and whose last
    // byte is 3.
    let mut buf = [0u8; 64];
    buf[56] = 1;
    buf[63] = 3;
    let value = U512::from_be_slice(&buf).unwrap();

    // Adding a small value only touches the last byte.
    let bumped = value + U512::from_word(5);
    let mut expected = buf;
    expected[63] = 8;
    let bytes: Vec<u8> = bumped.big_endian_bytes().iter().collect();
    assert_eq!(bytes, expected);

    // Adding zero changes nothing.
    let same = value + U512::ZERO;
    assert_eq!(same.big_endian_bytes().get(63), Some(3));

    // Adding the word maximum carries across a limb boundary, and the
    // carry lands in the byte just above the lowest limb.
    let carried = value + U512::from_word(Word::MAX);
    let mut expected = [0u8; 64];
    expected[63] = 2;
    expected[56] = 1;
    expected[63 - WORD_BYTES] = 1;
    let bytes: Vec<u8> = carried.big_endian_bytes().iter().collect();
    assert_eq!(bytes, expected);
}
