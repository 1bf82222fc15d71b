use base85::{decode, encode};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: [usize; 5] = [64, 256, 1024, 4096, 16384];

fn sample(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let data = sample(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| encode(black_box(data)));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in SIZES {
        let encoded = encode(&sample(size));

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| decode(black_box(encoded)).unwrap());
        });
    }
    group.finish();
}

fn bench_decode_unaligned(c: &mut Criterion) {
    // Odd lengths exercise the padded tail group
    let mut group = c.benchmark_group("decode_unaligned");

    for size in SIZES {
        let encoded = encode(&sample(size + 3));

        group.throughput(Throughput::Bytes((size + 3) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size + 3), &encoded, |b, encoded| {
            b.iter(|| decode(black_box(encoded)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_decode_unaligned);
criterion_main!(benches);
