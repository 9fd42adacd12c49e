extern crate criterion;
extern crate lzw12;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lzw12::{decode::Decoder, encode::Encoder, max_decoded_len, max_encoded_len};

const ALICE: &[u8] = include_bytes!("../demos/alice.txt");

pub fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let id = BenchmarkId::new("alice", ALICE.len());
    group.throughput(Throughput::Bytes(ALICE.len() as u64));
    group.bench_with_input(id, &ALICE, |b, data| {
        let mut encoder = Encoder::new();
        let mut outbuf = vec![0; max_encoded_len(data.len())];
        b.iter(|| {
            encoder.reset();
            let len = encoder.encode(data, &mut outbuf).expect("Error");
            black_box(&outbuf[..len]);
        })
    });
}

pub fn bench_decode(c: &mut Criterion) {
    let packed = Encoder::new().encode_to_vec(ALICE).expect("Error");
    let mut group = c.benchmark_group("decode");
    let id = BenchmarkId::new("alice", packed.len());
    group.throughput(Throughput::Bytes(ALICE.len() as u64));
    group.bench_with_input(id, &packed, |b, data| {
        let mut decoder = Decoder::new();
        let mut outbuf = vec![0; max_decoded_len(data.len())];
        b.iter(|| {
            decoder.reset();
            let len = decoder.decode(data, &mut outbuf).expect("Error");
            black_box(&outbuf[..len]);
        })
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
