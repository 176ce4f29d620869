// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Insets, Rect, Vec2};
use understory_detent::{Detent, DetentId, DetentSet, TraitSnapshot, presets};
use understory_sheet_interaction::{
    Directions, GesturePhase, PercentageMode, SheetInteraction, SheetSnapshot, map_sample,
};
use understory_sheet_layout::SheetLayout;

fn layout() -> SheetLayout {
    SheetLayout::new(
        Rect::new(0.0, 0.0, 393.0, 852.0),
        Insets::new(0.0, 59.0, 0.0, 34.0),
        TraitSnapshot::PHONE_PORTRAIT,
    )
}

fn stock_detents() -> DetentSet {
    DetentSet::new([
        presets::small(),
        presets::med_small(),
        presets::medium(),
        presets::med_large(),
        presets::large(),
    ])
    .with_selected(presets::MEDIUM)
}

fn many_detents(n: usize) -> DetentSet {
    DetentSet::new((0..n).map(|i| {
        let fraction = (i + 1) as f64 / n as f64;
        Detent::fraction(DetentId::new(format!("d{i}")), fraction)
    }))
}

fn sample_heights(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| 56.0 + (i as f64 / count as f64) * 690.0)
        .collect()
}

fn bench_map_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_sample");
    let heights = sample_heights(256);
    group.throughput(Throughput::Elements(heights.len() as u64));
    for (name, detents) in [
        ("stock5", stock_detents()),
        ("fraction16", many_detents(16)),
        ("fraction64", many_detents(64)),
    ] {
        let layouts: Vec<_> = heights
            .iter()
            .map(|&h| layout().with_sheet_height(h))
            .collect();
        group.bench_function(name, |b| {
            b.iter(|| {
                for l in &layouts {
                    let change = map_sample(
                        &detents,
                        l,
                        Directions::UP | Directions::RIGHT,
                        PercentageMode::ActiveDetents,
                    );
                    let _ = black_box(change);
                }
            });
        });
    }
    group.finish();
}

fn bench_drag_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_session");
    let heights = sample_heights(120);
    group.throughput(Throughput::Elements(heights.len() as u64));
    group.bench_function("began_changed_ended", |b| {
        b.iter_batched(
            || {
                (
                    SheetInteraction::new(),
                    SheetSnapshot::new(layout().with_sheet_height(374.5), stock_detents()),
                )
            },
            |(mut sheet, mut host)| {
                let up = Vec2::new(0.0, -500.0);
                let _ = sheet.handle_pan(&host, GesturePhase::Began, up);
                for &h in &heights {
                    host.layout = layout().with_sheet_height(h);
                    black_box(sheet.handle_pan(&host, GesturePhase::Changed, up));
                }
                let _ = sheet.handle_pan(&host, GesturePhase::Ended, up);
                black_box(sheet.run_deferred(&host));
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_map_sample, bench_drag_session);
criterion_main!(benches);
