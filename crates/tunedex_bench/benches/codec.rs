//! Field-map codec benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tunedex_bench::sample_song;
use tunedex_codec::{decode_song, encode_song};

fn bench_encode(c: &mut Criterion) {
    let song = sample_song(42);
    c.bench_function("encode_song", |b| {
        b.iter(|| {
            let fields = encode_song(black_box(&song));
            black_box(fields);
        });
    });
}

fn bench_decode(c: &mut Criterion) {
    let fields = encode_song(&sample_song(42));
    c.bench_function("decode_song", |b| {
        b.iter(|| {
            let song = decode_song(black_box(&fields)).unwrap();
            black_box(song);
        });
    });
}

fn bench_roundtrip(c: &mut Criterion) {
    let song = sample_song(42);
    c.bench_function("roundtrip", |b| {
        b.iter(|| {
            let decoded = decode_song(&encode_song(black_box(&song))).unwrap();
            black_box(decoded);
        });
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_roundtrip);
criterion_main!(benches);
