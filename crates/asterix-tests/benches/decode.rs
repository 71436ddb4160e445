use asterix_decoder::{Decoder, decode};
use asterix_tests::{CAT034_NORTH, CAT048_PLOT, CAT200_UNKNOWN, CAT255_FULL, fixture, stream};
use asterix_transform::TransformRegistry;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn bench_decode_single_block(c: &mut Criterion) {
    let payload = fixture(CAT048_PLOT);

    c.bench_function("decode_cat048_plot", |b| {
        b.iter(|| decode(&payload).unwrap());
    });
}

fn bench_decode_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_stream");

    for blocks in [10, 100, 1000] {
        let fixtures: Vec<&str> = [CAT255_FULL, CAT034_NORTH, CAT048_PLOT, CAT200_UNKNOWN]
            .into_iter()
            .cycle()
            .take(blocks)
            .collect();
        let payload = stream(&fixtures);
        let decoder = Decoder::standard();

        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(blocks), &payload, |b, p| {
            b.iter(|| decoder.decode(p).unwrap());
        });
    }

    group.finish();
}

fn bench_transform(c: &mut Criterion) {
    let decoded = decode(&fixture(CAT255_FULL)).unwrap();
    let block = &decoded.blocks[0];

    c.bench_function("transform_cat255_full", |b| {
        b.iter(|| TransformRegistry::standard().transform_block(block));
    });
}

criterion_group!(
    benches,
    bench_decode_single_block,
    bench_decode_stream,
    bench_transform
);
criterion_main!(benches);
