use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use crewcache_sim::{Catalog, PolicyKind, Resource, Simulation, SimulationBuilder};

fn build_simulation(skills: u32, capacity: usize, length: usize) -> Simulation {
  let resources = (0..skills)
    .map(|i| {
      Resource::new(
        i,
        i,
        5.0 + f64::from(i % 13),
        0.5 + f64::from(i % 5) * 0.5,
      )
    })
    .collect();
  let catalog = Catalog::new(resources).unwrap();

  SimulationBuilder::new(catalog)
    .capacity(capacity)
    .stream_length(length)
    .persistence(8)
    .seed(0xC0FFEE)
    .build()
    .unwrap()
}

fn bench_single_policies(c: &mut Criterion) {
  let sim = build_simulation(200, 16, 50_000);

  let mut group = c.benchmark_group("run_policy");
  group.throughput(Throughput::Elements(sim.stream().len() as u64));
  for kind in PolicyKind::ALL {
    group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
      b.iter(|| black_box(sim.run(kind).unwrap()));
    });
  }
  group.finish();
}

fn bench_full_comparison(c: &mut Criterion) {
  let mut group = c.benchmark_group("compare");
  for (capacity, length) in [(4usize, 10_000usize), (16, 50_000), (64, 50_000)] {
    let sim = build_simulation(500, capacity, length);
    group.throughput(Throughput::Elements((length * PolicyKind::ALL.len()) as u64));
    group.bench_function(format!("c{}_n{}", capacity, length), |b| {
      b.iter(|| black_box(sim.compare().unwrap()));
    });
  }
  group.finish();
}

criterion_group!(benches, bench_single_policies, bench_full_comparison);
criterion_main!(benches);
