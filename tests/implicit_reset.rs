use lzw12::{decode::Decoder, dict::Dictionary, encode::Encoder, LzwError};

const ALICE: &[u8] = include_bytes!("../demos/alice.txt");

#[test]
fn reset_twice_equals_reset_once() {
    let mut encoder = Encoder::new();
    encoder.encode_to_vec(ALICE).unwrap();

    encoder.reset();
    let once = encoder.stats();
    encoder.reset();
    assert_eq!(encoder.stats(), once);
    assert_eq!(once, Dictionary::new().stats());
}

#[test]
fn sessions_are_repeatable_after_reset() {
    let mut encoder = Encoder::new();
    let first = encoder.encode_to_vec(ALICE).unwrap();
    encoder.reset();
    let second = encoder.encode_to_vec(ALICE).unwrap();
    assert_eq!(first, second);

    let mut decoder = Decoder::new();
    assert_eq!(decoder.decode_to_vec(&first).unwrap(), ALICE);
    decoder.reset();
    assert_eq!(decoder.decode_to_vec(&second).unwrap(), ALICE);
}

#[test]
fn skipped_reset_continues_the_dictionary() {
    let mut encoder = Encoder::new();
    let fresh = encoder.encode_to_vec(ALICE).unwrap();
    // The dictionary still knows the text, so the second stream is shorter.
    let warm = encoder.encode_to_vec(ALICE).unwrap();
    assert!(warm.len() < fresh.len());

    // A decoder that is kept in lockstep follows along.
    let mut decoder = Decoder::new();
    assert_eq!(decoder.decode_to_vec(&fresh).unwrap(), ALICE);
    assert_eq!(decoder.decode_to_vec(&warm).unwrap(), ALICE);
}

#[test]
fn mismatched_sessions_do_not_agree() {
    let mut encoder = Encoder::new();
    encoder.encode_to_vec(ALICE).unwrap();
    let warm = encoder.encode_to_vec(ALICE).unwrap();

    // A freshly seeded decoder does not know the learned codes.
    let mut decoder = Decoder::new();
    let result = decoder.decode_to_vec(&warm);
    assert!(matches!(result, Err(LzwError::InvalidCode { .. })), "{:?}", result);
}

#[test]
fn independent_sessions_interleave() {
    let mut first = Encoder::new();
    let mut second = Encoder::new();
    let a = first.encode_to_vec(b"abababababab").unwrap();
    let b = second.encode_to_vec(ALICE).unwrap();
    let a2 = first.encode_to_vec(b"").unwrap();
    assert!(a2.is_empty());

    assert_eq!(Decoder::new().decode_to_vec(&a).unwrap(), b"abababababab");
    assert_eq!(Decoder::new().decode_to_vec(&b).unwrap(), ALICE);
}
