use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use normalize::normalize;

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in [64, 512, 4096, 32768].iter() {
        let text = "wow , such text!! ok ".repeat(*size / 21 + 1);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("bytes_{size}"), |b| {
            b.iter(|| normalize(black_box(&text)).expect("normalize"))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
