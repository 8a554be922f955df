use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tintshade::{generate_palette, hex_to_hsl, hsl_to_hex, Float};

const BASES: [&str; 6] = ["#3498db", "#e74c3c", "#2ecc71", "#3af", "#808080", "#ffffff"];

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("tintshade");

    group.bench_function("hex-to-hsl", |b| {
        b.iter(|| {
            for base in BASES {
                let _ = black_box(hex_to_hsl(black_box(base)));
            }
        })
    });

    group.bench_function("hsl-to-hex", |b| {
        b.iter(|| {
            for hue in (0..360_u16).step_by(60) {
                black_box(hsl_to_hex(black_box(Float::from(hue)), 70.0, 53.0));
            }
        })
    });

    group.bench_function("generate-palette", |b| {
        b.iter(|| {
            for base in BASES {
                let _ = black_box(generate_palette(black_box(base)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
