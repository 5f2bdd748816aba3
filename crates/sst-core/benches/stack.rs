use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use sst_core::{minimum_stabilization_cost, random_radii, stabilization_plan};

fn bench_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_cost");
    for &n in &[100usize, 1_000, 4_000] {
        let radii = random_radii(n, 1_000_000_000, &mut SmallRng::seed_from_u64(42));
        group.bench_with_input(BenchmarkId::new("rolling", n), &radii, |b, r| {
            b.iter(|| minimum_stabilization_cost(r.len(), black_box(r), 3, 5))
        });
        // The plan keeps N·M back-pointers; skip it for the largest stack.
        if n <= 1_000 {
            group.bench_with_input(BenchmarkId::new("plan", n), &radii, |b, r| {
                b.iter(|| stabilization_plan(r.len(), black_box(r), 3, 5))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_stack);
criterion_main!(benches);
