use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nsg_search::{collect, SearchConfig, SearchMode};

fn bench_search(c: &mut Criterion) {
    let config = SearchConfig::default();
    let modes = [
        ("fixed_frobenius_9", SearchMode::FixedFrobenius { frobenius: 9 }),
        ("fixed_genus_4", SearchMode::FixedGenus { genus: 4 }),
        (
            "fixed_genus_multiplicity_4_3",
            SearchMode::FixedGenusMultiplicity {
                genus: 4,
                multiplicity: 3,
            },
        ),
    ];
    for (name, mode) in modes {
        c.bench_function(name, |b| {
            b.iter(|| {
                let report = collect(black_box(mode), &config).expect("search");
                black_box(report.records.len());
            });
        });
    }
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
