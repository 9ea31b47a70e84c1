use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use tree_filter::{Selector, TreeFilter, Value, dual, lazy, map, seq};

fn sample_selectors() -> Vec<&'static str> {
    vec![
        "name,environments",
        "environments[id,last_deploy]",
        "environments[*]",
        "name,owner[id,name],environments[id,hosts[name,region],last_deploy[*]]",
    ]
}

fn build_sample_document(environments: usize) -> Value {
    let envs = (0..environments).map(|i| {
        let id = format!("env-{i}");
        let href = format!("/environments/{i}");
        map([
            ("id", id.clone().into()),
            ("hosts", seq((0..4).map(|h| map([("name", format!("h{h}").into()), ("region", "eu".into())])))),
            ("last_deploy", dual(href, map([("id", id.into()), ("at", "2024-05-01".into())]))),
            ("stats", lazy(|| Ok(map([("deploys", 42.into())])))),
        ])
    });
    map([
        ("name", "shop".into()),
        ("owner", map([("id", 7.into()), ("name", "Ada".into())])),
        ("environments", seq(envs)),
    ])
}

fn benchmark_parser(c: &mut Criterion) {
    let selectors = sample_selectors();
    c.bench_function("parser/parse", |b| {
        b.iter(|| {
            for text in &selectors {
                black_box(Selector::parse(black_box(text)));
            }
        })
    });
}

fn benchmark_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter/apply");
    for size in [10usize, 100, 1000] {
        let document = build_sample_document(size);
        for text in sample_selectors() {
            let filter = TreeFilter::new(text);
            group.bench_with_input(BenchmarkId::new(text, size), &document, |b, doc| {
                b.iter(|| black_box(filter.filter(doc).expect("filter")))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, benchmark_parser, benchmark_filter);
criterion_main!(benches);
