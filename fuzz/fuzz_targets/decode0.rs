#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|raw_data: &[u8]| {
    let mut decoder = lzw12::decode::Decoder::new();
    let mut out = [0; 1 << 12];
    let _ = decoder.decode(raw_data, &mut out);
});
