use lzw12::{decode::Decoder, encode::Encoder, max_encoded_len, LzwError};

const ALICE: &[u8] = include_bytes!("../demos/alice.txt");

#[test]
fn encode_stops_at_every_size() {
    let mut encoder = Encoder::new();
    let packed = encoder.encode_to_vec(ALICE).unwrap();
    assert!(packed.len() < ALICE.len());
    assert!(packed.len() <= max_encoded_len(ALICE.len()));

    for size in 0..packed.len() {
        let mut out = vec![0; size];
        encoder.reset();
        let result = encoder.encode(ALICE, &mut out);
        assert!(
            matches!(result, Err(LzwError::CapacityExceeded { .. })),
            "size {}: {:?}",
            size,
            result
        );
    }

    let mut out = vec![0; packed.len()];
    encoder.reset();
    assert_eq!(encoder.encode(ALICE, &mut out), Ok(packed.len()));
    assert_eq!(out, packed);
}

#[test]
fn decode_stops_at_every_size() {
    let packed = Encoder::new().encode_to_vec(ALICE).unwrap();
    let mut decoder = Decoder::new();

    for size in (0..ALICE.len()).step_by(7) {
        let mut out = vec![0; size];
        decoder.reset();
        let result = decoder.decode(&packed, &mut out);
        assert!(
            matches!(result, Err(LzwError::CapacityExceeded { .. })),
            "size {}: {:?}",
            size,
            result
        );
    }

    let mut out = vec![0; ALICE.len()];
    decoder.reset();
    assert_eq!(decoder.decode(&packed, &mut out), Ok(ALICE.len()));
    assert_eq!(out, ALICE);
}

#[test]
fn vec_helpers_roundtrip() {
    let packed = Encoder::new().encode_to_vec(ALICE).unwrap();
    let unpacked = Decoder::new().decode_to_vec(&packed).unwrap();
    assert_eq!(unpacked, ALICE);
}
