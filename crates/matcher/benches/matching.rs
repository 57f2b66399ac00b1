//! Benchmarks for tokenizing, matching, scoring and ranking.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sift_match::{
    edit_distance, fuzzy_score, highlight, rank, Budget, HighlightStyle, MatcherConfig,
    MatchingMethod, ThemeHighlight, TokenSet,
};

fn create_candidates(count: usize) -> Vec<String> {
    let words = ["fire", "fox", "term", "Editor", "mail", "Calc", "viewer", "2", "-", "_"];
    (0..count)
        .map(|i| {
            (0..4)
                .map(|j| words[(i * 7 + j * 3) % words.len()])
                .collect::<String>()
        })
        .collect()
}

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");

    for method in [MatchingMethod::Literal, MatchingMethod::Glob, MatchingMethod::Fuzzy] {
        let config = MatcherConfig::with_method(method);
        group.bench_function(method.as_str(), |b| {
            b.iter(|| TokenSet::compile(black_box("fire fox term"), &config))
        });
    }

    group.finish();
}

fn bench_matches(c: &mut Criterion) {
    let candidates = create_candidates(1000);
    let mut group = c.benchmark_group("matches");

    for method in [MatchingMethod::Literal, MatchingMethod::Fuzzy] {
        let tokens = TokenSet::compile("fx tm", &MatcherConfig::with_method(method));
        group.bench_function(method.as_str(), |b| {
            b.iter(|| candidates.iter().filter(|c| tokens.matches(black_box(c))).count())
        });
    }

    group.finish();
}

fn bench_scorers(c: &mut Criterion) {
    c.bench_function("fuzzy_score", |b| {
        b.iter(|| fuzzy_score(black_box("fxedt"), black_box("firefoxEditor_viewer2"), false))
    });

    c.bench_function("edit_distance", |b| {
        b.iter(|| edit_distance(black_box("kitten"), black_box("sitting on the mat"), false))
    });

    let tokens = TokenSet::compile("fxedt", &MatcherConfig::with_method(MatchingMethod::Fuzzy));
    let theme = ThemeHighlight::new(HighlightStyle::BOLD);
    c.bench_function("highlight", |b| {
        b.iter(|| highlight(&tokens, black_box("firefoxEditor_viewer2"), &theme))
    });
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let config = MatcherConfig {
        sort: true,
        ..MatcherConfig::with_method(MatchingMethod::Fuzzy)
    };
    let tokens = TokenSet::compile("fte", &config);

    for size in [100, 1000, 10000].iter() {
        let candidates = create_candidates(*size);
        group.bench_with_input(BenchmarkId::new("fuzzy_sorted", size), size, |b, _| {
            b.iter(|| rank(&tokens, "fte", black_box(&candidates), &Budget::unlimited()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compile, bench_matches, bench_scorers, bench_rank);
criterion_main!(benches);
