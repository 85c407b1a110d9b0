use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tdiff_core::{compute_diff, lcs_len, AlignmentTable};

/// Two versions of a file: every seventh line edited, every eleventh dropped.
fn versions(n: usize) -> (Vec<String>, Vec<String>) {
    let old: Vec<String> = (0..n).map(|i| format!("line {i}")).collect();
    let new = (0..n)
        .filter(|i| i % 11 != 0)
        .map(|i| {
            if i % 7 == 0 {
                format!("edited {i}")
            } else {
                format!("line {i}")
            }
        })
        .collect();
    (old, new)
}

fn bench_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff");
    for n in [100, 500, 2000] {
        let (old, new) = versions(n);
        group.bench_with_input(BenchmarkId::new("table", n), &n, |b, _| {
            b.iter(|| AlignmentTable::build(black_box(&old), black_box(&new)))
        });
        group.bench_with_input(BenchmarkId::new("rolling_lcs", n), &n, |b, _| {
            b.iter(|| lcs_len(black_box(&old), black_box(&new)))
        });
        group.bench_with_input(BenchmarkId::new("compute_diff", n), &n, |b, _| {
            b.iter(|| compute_diff(black_box(&old), black_box(&new)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_diff);
criterion_main!(benches);
