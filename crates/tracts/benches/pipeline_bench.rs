//! Criterion benchmarks for the per-interaction derivations.
//!
//! Benchmarks:
//!   - render_set over the sample catalog, unfiltered and filtered
//!   - recommend for a tract where every rule fires
//!   - NYC table search + sort
//!
//! Run with: cargo bench -p tracts --bench pipeline_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tracts::filter::FilterState;
use tracts::fixtures;
use tracts::layers::{render_set, LayerKind};
use tracts::recommendations::recommend;
use tracts::table::{SortField, TableQuery, TableSort};

// ---------------------------------------------------------------------------
// Benchmark: render_set
// ---------------------------------------------------------------------------

fn bench_render_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_set");
    let features = fixtures::sample_tracts().unwrap();

    group.bench_function("unfiltered_food_desert", |b| {
        let filter = FilterState::default();
        b.iter(|| black_box(render_set(&features, &filter, LayerKind::FoodDesert)));
    });

    group.bench_function("ca_low_income_poverty", |b| {
        let filter = FilterState::default().with_state("CA").with_low_income(true);
        b.iter(|| black_box(render_set(&features, &filter, LayerKind::Poverty)));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: recommend
// ---------------------------------------------------------------------------

fn bench_recommend(c: &mut Criterion) {
    let features = fixtures::sample_tracts().unwrap();
    // Kings County: dense, poor and car-light, so most rules fire
    let tract = features
        .iter()
        .find(|f| f.id() == "36047029000")
        .map(|f| f.properties.clone())
        .unwrap();

    c.bench_function("recommend_desert_tract", |b| {
        b.iter(|| black_box(recommend(black_box(&tract))));
    });
}

// ---------------------------------------------------------------------------
// Benchmark: NYC table
// ---------------------------------------------------------------------------

fn bench_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("nyc_table");
    let tracts = fixtures::nyc_tracts().unwrap();

    group.bench_function("default_sort", |b| {
        let query = TableQuery::default();
        b.iter(|| black_box(query.run(&tracts).len()));
    });

    group.bench_function("search_then_population_desc", |b| {
        let query = TableQuery {
            search: "bro".to_string(),
            sort: TableSort::default()
                .toggled(SortField::Population)
                .toggled(SortField::Population),
            ..Default::default()
        };
        b.iter(|| black_box(query.run(&tracts).len()));
    });

    group.finish();
}

criterion_group!(benches, bench_render_set, bench_recommend, bench_table);
criterion_main!(benches);
