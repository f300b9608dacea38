//! Benchmarks for Folio formatting and animation
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use folio::animation::{AnimationRun, Animator, ManualFrameLoop};
use folio::charts::dashboard_charts;
use folio::format::*;
use std::rc::Rc;
use std::time::Duration;

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    let amounts = [999.0, 45_000.0, 1_500_000.0, 31_896_000.0, 1_234_567_890.0];

    group.throughput(Throughput::Elements(amounts.len() as u64));

    group.bench_function("format_currency", |b| {
        b.iter(|| {
            for amount in amounts {
                black_box(format_currency(black_box(amount)));
            }
        })
    });

    group.bench_function("format_rupees", |b| {
        b.iter(|| {
            for amount in amounts {
                black_box(format_rupees(black_box(amount)));
            }
        })
    });

    group.bench_function("progress_percentage", |b| {
        b.iter(|| calculate_progress_percentage(black_box(58.0), black_box(1000.0)).unwrap())
    });

    group.finish();
}

fn bench_animation(c: &mut Criterion) {
    let mut group = c.benchmark_group("animation");

    group.bench_function("run_value", |b| {
        let mut run = AnimationRun::new(0.0, 31_896_000.0, Duration::from_millis(2500));
        run.advance_to(Duration::from_millis(1200));
        b.iter(|| black_box(&run).value())
    });

    for frame_ms in [4u64, 16] {
        group.bench_function(format!("counter_{}ms_frames", frame_ms), |b| {
            b.iter(|| {
                let frames = Rc::new(ManualFrameLoop::new(Duration::from_millis(frame_ms)));
                let animator = Animator::new(frames.clone());
                animator.animate(0.0, 31_896_000.0, Duration::from_millis(2500), |value| {
                    black_box(format_rupees(value));
                });
                frames.run_until_idle(10_000)
            })
        });
    }

    group.finish();
}

fn bench_charts(c: &mut Criterion) {
    c.bench_function("dashboard_charts_json", |b| {
        b.iter(|| serde_json::to_string(&dashboard_charts()).unwrap())
    });
}

criterion_group!(benches, bench_format, bench_animation, bench_charts);
criterion_main!(benches);
