// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_detent::{DetentId, presets};
use understory_sheet_interaction::{InteractionChange, InteractionEnd, InteractionEvent};
use understory_sheet_stack::{
    ForwardingBehavior, NavigationForwarding, SheetContext, SheetId, SheetInteractionDelegate,
    SheetNode, SheetStack,
};

#[derive(Default)]
struct Counter(u64);

impl SheetInteractionDelegate for Counter {
    fn began(&mut self, _: &SheetContext, _: &DetentId) {
        self.0 += 1;
    }
    fn changed(&mut self, _: &SheetContext, _: &InteractionChange) {
        self.0 += 1;
    }
    fn will_end(&mut self, _: &SheetContext, _: &InteractionEnd) {
        self.0 += 1;
    }
    fn did_end(&mut self, _: &SheetContext, _: &DetentId) {
        self.0 += 1;
    }
}

impl ForwardingBehavior for Counter {
    fn should_handle_sheet_interaction(&self, cx: &SheetContext) -> bool {
        cx.is_top_of_navigation
    }
    fn should_notify_root_presenter(&self) -> bool {
        true
    }
}

/// A stack `depth` sheets deep. Every other sheet participates; each carries a small
/// navigation stack.
fn build(depth: usize) -> (SheetStack, SheetId) {
    let mut stack = SheetStack::new();
    let mut top = stack.insert_root(Some(Box::<Counter>::default()));
    for i in 0..depth {
        let nav = NavigationForwarding::new()
            .with_child(Counter::default())
            .with_child(Counter::default())
            .with_child(Counter::default());
        let node = if i % 2 == 0 || i + 1 == depth {
            SheetNode::participating(Counter::default()).with_navigation(nav)
        } else {
            SheetNode::new().with_surface(Counter::default())
        };
        top = stack.present(top, node).unwrap();
    }
    (stack, top)
}

fn bench_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("route");
    for &depth in &[2usize, 8, 32] {
        let (stack, top) = build(depth);
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_function(format!("depth{depth}"), |b| {
            b.iter(|| black_box(stack.route(black_box(top))));
        });
    }
    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let event = InteractionEvent::DidEnd {
        detent: presets::MEDIUM,
    };
    for &depth in &[2usize, 8, 32] {
        let (mut stack, top) = build(depth);
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_function(format!("depth{depth}"), |b| {
            b.iter(|| black_box(stack.dispatch(top, &event)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_route, bench_dispatch);
criterion_main!(benches);
