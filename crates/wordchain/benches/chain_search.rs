use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use wordchain::cycles::find_cycles;
use wordchain::graph::{ChainGraph, Entity};
use wordchain::longest_chain::longest_chain_from;
use wordchain::{AnalysisOptions, analyze};

const SYLLABLES: [char; 14] = [
    '가', '나', '다', '라', '마', '바', '사', '아', '자', '차', '카', '타', '파', '하',
];

/// A vocabulary of `count` three-syllable words over an alphabet of `alphabet` initial/final
/// syllables. Smaller alphabets give denser graphs.
fn build_vocabulary(count: usize, alphabet: usize) -> ChainGraph {
    let alphabet = alphabet.clamp(2, SYLLABLES.len());
    let entities = (0..count)
        .map(|i| {
            let first = SYLLABLES[i % alphabet];
            let last = SYLLABLES[(i * 7 + i / alphabet) % alphabet];
            let middle = char::from_u32(0xAC00 + i as u32).unwrap_or('가');
            Entity::new(i as u32 + 1, format!("{first}{middle}{last}"), 1 + (i % 9) as u32)
                .expect("non-empty name")
        })
        .collect();
    ChainGraph::new(entities).expect("unique ids")
}

fn bench_longest_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("longest_chain");
    group.measurement_time(Duration::from_secs(10));

    let cases = [
        ("v200_a14", 200usize, 14usize),
        ("v1000_a14", 1000usize, 14usize),
        ("v1000_a4", 1000usize, 4usize),
    ];

    for (name, count, alphabet) in cases {
        let g = build_vocabulary(count, alphabet);
        group.bench_with_input(BenchmarkId::new("longest_chain_from", name), &g, |b, g| {
            let start = &g.entities()[0];
            b.iter(|| black_box(longest_chain_from(black_box(g), start).len()))
        });
    }

    group.finish();
}

fn bench_cycles(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycles");

    for (name, count, alphabet) in [("v200_a14", 200usize, 14usize), ("v1000_a6", 1000, 6)] {
        let g = build_vocabulary(count, alphabet);
        group.bench_with_input(BenchmarkId::new("find_cycles", name), &g, |b, g| {
            b.iter(|| black_box(find_cycles(black_box(g)).len()))
        });
    }

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    group.sample_size(20);

    let g = build_vocabulary(1000, 14);
    let options = AnalysisOptions::default();
    group.bench_function("v1000_a14", |b| {
        b.iter(|| black_box(analyze(black_box(&g), &options).summary().longest_chain_length))
    });

    group.finish();
}

criterion_group!(benches, bench_longest_chain, bench_cycles, bench_analyze);
criterion_main!(benches);
