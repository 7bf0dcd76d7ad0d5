use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use point_plotter::core::{sample_curve, ViewportFitter};
use point_plotter::{CurvePreset, Point, PointSetStore, Viewport};
use std::hint::black_box;

fn bench_curve_pipeline(c: &mut Criterion) {
    let viewport = Viewport::new(1280.0, 720.0);
    let mut group = c.benchmark_group("curve_pipeline");

    for preset in [CurvePreset::Ellipse, CurvePreset::Butterfly] {
        group.bench_with_input(
            BenchmarkId::new("sample_and_fit", preset.label()),
            &preset,
            |b, preset| {
                b.iter(|| {
                    let raw = preset.sample().expect("Preset sollte abtastbar sein");
                    let fitted = ViewportFitter::new(viewport)
                        .fit(black_box(&raw))
                        .expect("Einpassen sollte gelingen");
                    black_box(fitted.len())
                })
            },
        );
    }

    for &count in &[1_000usize, 100_000usize] {
        group.bench_with_input(BenchmarkId::new("dense_ellipse", count), &count, |b, &n| {
            b.iter(|| {
                let raw = sample_curve(
                    0.0,
                    std::f64::consts::TAU,
                    |t| 0.5 * t.cos(),
                    |t| 0.27 * t.sin(),
                    black_box(n),
                )
                .expect("Domäne ist gültig");
                let fitted = ViewportFitter::new(viewport)
                    .fit(&raw)
                    .expect("Einpassen sollte gelingen");
                black_box(fitted.len())
            })
        });
    }

    group.finish();
}

fn build_store(count: usize) -> PointSetStore {
    let mut store = PointSetStore::new();
    for i in 0..count {
        let t = i as f32 / count as f32;
        store.push(Point::new(t * 2.0 - 1.0, (t * 17.0).fract() - 0.5));
    }
    store
}

fn bench_translate(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate_in_place");

    for &count in &[10_000usize, 100_000usize] {
        let store = build_store(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &store, |b, store| {
            let mut store = store.clone();
            b.iter(|| {
                store.translate_in_place(black_box(Vec2::new(0.001, -0.001)));
                black_box(store.len())
            })
        });
    }

    group.finish();
}

criterion_group!(core_benches, bench_curve_pipeline, bench_translate);
criterion_main!(core_benches);
