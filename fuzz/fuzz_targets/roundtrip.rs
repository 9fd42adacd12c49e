#![no_main]
use libfuzzer_sys::fuzz_target;
use lzw12::{decode::Decoder, encode::Encoder};

fuzz_target!(|data: &[u8]| {
    let mut encoder = Encoder::new();
    let buffer = encoder.encode_to_vec(data).expect("worst case buffer suffices");

    let mut decoder = Decoder::new();
    let compare = decoder.decode_to_vec(&buffer);
    assert_eq!(compare.as_deref(), Ok(data));
    assert_eq!(encoder.stats(), decoder.stats());
});
