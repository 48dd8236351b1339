use criterion::{criterion_group, criterion_main, Criterion};
use freightpath_lib::{
    load_network, select_strategy, GraphIndex, HeuristicConfig, OptimizationPolicy,
    RouteOptimizer, SearchAlgorithm, SearchThresholds, Shipment,
};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;
use std::sync::Arc;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/sample_network.json")
}

static INDEX: Lazy<Arc<GraphIndex>> = Lazy::new(|| {
    let network = load_network(&fixture_path()).expect("fixture loads");
    Arc::new(GraphIndex::build(&network))
});
static INTERSTATE: Lazy<Shipment> = Lazy::new(|| Shipment::new("2050", "3010", 120.0));

fn benchmark_pathfinding(c: &mut Criterion) {
    let index = &**INDEX;
    let shipment = &*INTERSTATE;
    let thresholds = SearchThresholds::default();

    c.bench_function("index_build_sample", |b| {
        let network = load_network(&fixture_path()).expect("fixture loads");
        b.iter(|| black_box(GraphIndex::build(&network).stats()));
    });

    c.bench_function("astar_2050_3010", |b| {
        let strategy = select_strategy(SearchAlgorithm::AStar, HeuristicConfig::default());
        b.iter(|| {
            let paths = strategy
                .find_paths(index, shipment, &thresholds)
                .expect("route exists");
            black_box(paths[0].total_cost)
        });
    });

    c.bench_function("bidirectional_2050_3010", |b| {
        let strategy = select_strategy(SearchAlgorithm::Bidirectional, HeuristicConfig::default());
        b.iter(|| {
            let paths = strategy
                .find_paths(index, shipment, &thresholds)
                .expect("route exists");
            black_box(paths.len())
        });
    });

    c.bench_function("multi_criteria_2050_3010", |b| {
        let optimizer =
            RouteOptimizer::with_algorithm(Arc::clone(&INDEX), SearchAlgorithm::Bidirectional);
        b.iter(|| {
            let paths = optimizer
                .optimize(
                    OptimizationPolicy::MultiCriteria,
                    shipment,
                    f64::INFINITY,
                    f64::INFINITY,
                )
                .expect("route exists");
            black_box(paths[0].score)
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
