use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dfa_minimize::{minimize, random::generate_random_dfa};

fn bench_minimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimize");
    for size in [8, 16, 32, 64] {
        let dfa = generate_random_dfa(3, size, size as u64);
        group.bench_with_input(BenchmarkId::from_parameter(size), &dfa, |b, dfa| {
            b.iter(|| minimize(black_box(dfa)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_minimize);
criterion_main!(benches);
