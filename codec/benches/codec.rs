use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use packwire_codec::{Decode, Decoder, Encode, Encoder};
use std::{collections::BTreeMap, hint::black_box};

fn bench_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence");
    for &n in &[16usize, 254, 4096, 65536] {
        let values: Vec<u64> = (0..n as u64).collect();
        let encoded = values.encode();
        group.throughput(Throughput::Bytes(encoded.len() as u64));

        group.bench_with_input(BenchmarkId::new("encode", n), &values, |b, values| {
            b.iter(|| {
                let mut encoder = Encoder::with_capacity(encoded.len());
                encoder.append(black_box(values));
                encoder.take()
            });
        });

        group.bench_with_input(BenchmarkId::new("decode", n), &encoded, |b, encoded| {
            b.iter(|| Vec::<u64>::decode(black_box(encoded)).unwrap());
        });
    }
    group.finish();
}

fn bench_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapping");
    for &n in &[16usize, 1024] {
        let map: BTreeMap<String, Vec<u8>> = (0..n)
            .map(|i| (format!("key-{i:08}"), vec![i as u8; i % 300]))
            .collect();
        let encoded = map.encode();
        group.throughput(Throughput::Bytes(encoded.len() as u64));

        group.bench_with_input(BenchmarkId::new("encode", n), &map, |b, map| {
            b.iter(|| black_box(map).encode());
        });

        group.bench_with_input(BenchmarkId::new("decode", n), &encoded, |b, encoded| {
            b.iter(|| {
                let mut decoder = Decoder::new(black_box(encoded));
                let map: BTreeMap<String, Vec<u8>> = decoder.extract().unwrap();
                map
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sequence, bench_mapping);
criterion_main!(benches);
