use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use strided_slice::{Dyn, DynStride, Slice};

fn make_data(n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..n).map(|_| rng.random()).collect()
}

fn bench_strided_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("strided_sum");
    for size in [1_000usize, 100_000, 1_000_000] {
        let data = make_data(size);
        let elements = size / 2;
        group.throughput(Throughput::Elements(elements as u64));

        group.bench_with_input(BenchmarkId::new("step_by", size), &size, |b, _| {
            b.iter(|| data.iter().step_by(2).sum::<f64>())
        });

        group.bench_with_input(BenchmarkId::new("slice_skip", size), &size, |b, _| {
            let view = Slice::from(&data).skip(2);
            b.iter(|| view.iter().copied().sum::<f64>())
        });
    }
    group.finish();
}

fn bench_reverse_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse_sum");
    for size in [100_000usize, 1_000_000] {
        let data = make_data(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("rev_adapter", size), &size, |b, _| {
            let view = Slice::from(&data);
            b.iter(|| view.iter().rev().copied().sum::<f64>())
        });

        group.bench_with_input(BenchmarkId::new("negative_stride", size), &size, |b, _| {
            let view: Slice<'_, f64, Dyn, DynStride> =
                Slice::new(&data, size, -1, size - 1).unwrap();
            b.iter(|| view.iter().copied().sum::<f64>())
        });
    }
    group.finish();
}

fn bench_transform_chain(c: &mut Criterion) {
    let data = make_data(1_000_000);
    let view = Slice::from(&data);

    c.bench_function("transform_chain", |b| {
        b.iter(|| {
            let v = view.drop_first(10).drop_last(10).skip(4).first(1000);
            v.iter().copied().sum::<f64>()
        })
    });
}

criterion_group!(
    benches,
    bench_strided_sum,
    bench_reverse_sum,
    bench_transform_chain
);
criterion_main!(benches);
