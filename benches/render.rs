#[macro_use]
extern crate criterion;
extern crate mandelbrot;

use criterion::{black_box, Criterion};
use mandelbrot::{colorize, escape_time, sample_plane, Complex, PlaneMapper, TransferId};

fn escape(c: &mut Criterion) {
    // seahorse valley: slow to escape, and outside both shortcut tests
    c.bench_function("escape_time seahorse", |b| {
        b.iter(|| escape_time(black_box(Complex::new(-0.7453, 0.1127)), 2000))
    });
}

fn plane(c: &mut Criterion) {
    c.bench_function("sample_plane 120x80 mirrored", |b| {
        let plane =
            PlaneMapper::new(120, 80, Complex::new(-2.0, 1.0), Complex::new(1.0, -1.0)).unwrap();
        b.iter(|| sample_plane(&plane, 200))
    });
    c.bench_function("sample_plane 120x80 off axis", |b| {
        let plane =
            PlaneMapper::new(120, 80, Complex::new(-2.0, 1.2), Complex::new(1.0, 0.2)).unwrap();
        b.iter(|| sample_plane(&plane, 200))
    });
}

fn color(c: &mut Criterion) {
    let plane =
        PlaneMapper::new(120, 80, Complex::new(-2.0, 1.0), Complex::new(1.0, -1.0)).unwrap();
    let samples = sample_plane(&plane, 200);
    c.bench_function("colorize 120x80 linear", move |b| {
        b.iter(|| colorize(&samples, 200, TransferId::Linear.function()))
    });
}

criterion_group!(benches, escape, plane, color);
criterion_main!(benches);
