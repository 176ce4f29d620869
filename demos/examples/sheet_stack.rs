// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sheet stack.
//!
//! A root presenter shows a settings sheet, which shows a navigation sheet with two pages.
//! Dragging the top sheet is forwarded down the stack; the covered pages of the navigation
//! stack stay quiet.
//!
//! Run:
//! - `RUST_LOG=understory_sheet_stack=trace cargo run -p understory_demos --example sheet_stack`

use kurbo::{Insets, Rect, Vec2};
use tracing_subscriber::EnvFilter;
use understory_detent::{DetentId, DetentSet, TraitSnapshot, presets};
use understory_sheet_interaction::{
    GesturePhase, InteractionChange, InteractionConfig, InteractionEnd, SheetInteraction,
    SheetSnapshot,
};
use understory_sheet_layout::SheetLayout;
use understory_sheet_stack::{
    ForwardingBehavior, NavigationForwarding, SheetContext, SheetInteractionDelegate, SheetNode,
    SheetStack,
};

/// Prints what it receives. Navigation pages only listen while visible.
struct Printer(&'static str);

impl Printer {
    fn say(&self, cx: &SheetContext, what: &str) {
        println!("  level {} {:<8} {what}", cx.level, self.0);
    }
}

impl SheetInteractionDelegate for Printer {
    fn began(&mut self, cx: &SheetContext, detent: &DetentId) {
        self.say(cx, &format!("began at {detent}"));
    }

    fn changed(&mut self, cx: &SheetContext, change: &InteractionChange) {
        self.say(
            cx,
            &format!(
                "changed toward {} ({:.2})",
                change.approaching.detent,
                change.percentage_approaching.value()
            ),
        );
    }

    fn will_end(&mut self, cx: &SheetContext, end: &InteractionEnd) {
        self.say(cx, &format!("will end at {}", end.target.detent));
    }

    fn did_end(&mut self, cx: &SheetContext, detent: &DetentId) {
        self.say(cx, &format!("did end at {detent}"));
    }

    fn keyboard_will_show(&mut self, cx: &SheetContext, from: &DetentId) {
        self.say(cx, &format!("keyboard shows, restore to {from} later"));
    }
}

impl ForwardingBehavior for Printer {
    fn should_handle_sheet_interaction(&self, cx: &SheetContext) -> bool {
        cx.is_top_of_navigation
    }

    fn should_notify_root_presenter(&self) -> bool {
        true
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let layout = SheetLayout::new(
        Rect::new(0.0, 0.0, 393.0, 852.0),
        Insets::new(0.0, 59.0, 0.0, 34.0),
        TraitSnapshot::PHONE_PORTRAIT,
    );
    let detents = DetentSet::new([presets::small(), presets::medium(), presets::large()])
        .with_selected(presets::MEDIUM);
    let mut host = SheetSnapshot::new(layout.with_sheet_height(374.5), detents);

    let mut stack = SheetStack::new();
    let root = stack.insert_root(Some(Box::new(Printer("root"))));
    let settings = stack
        .present(root, SheetNode::participating(Printer("settings")))
        .unwrap();
    let pages = NavigationForwarding::new()
        .with_child(Printer("list"))
        .with_child(Printer("detail"));
    let top = stack
        .present(
            settings,
            SheetNode::new()
                .with_surface(Printer("nav"))
                .with_interaction(SheetInteraction::with_config(
                    InteractionConfig::default().with_debug_label("nav"),
                ))
                .with_navigation(pages),
        )
        .unwrap();
    println!("hierarchy: {:?}", stack.hierarchy(top).unwrap());

    let up = Vec2::new(0.0, -540.0);
    println!("drag begins");
    stack
        .handle_pan(top, &host, GesturePhase::Began, up)
        .unwrap();

    println!("drag moves");
    host.layout = layout.with_sheet_height(520.0);
    stack
        .handle_pan(top, &host, GesturePhase::Changed, up)
        .unwrap();

    println!("release");
    stack.handle_pan(top, &host, GesturePhase::Ended, up).unwrap();
    host.detents.set_selected(Some(presets::LARGE));
    host.layout = layout.with_sheet_height(711.55);
    stack.selected_detent_changed(top).unwrap();
    stack.run_deferred(top, &host).unwrap();

    println!("drag on a covered sheet is ignored");
    let ignored = stack
        .handle_pan(settings, &host, GesturePhase::Began, up)
        .unwrap();
    assert!(ignored.is_empty(), "covered sheets do not track drags");

    println!("keyboard");
    stack.keyboard_will_show(top, &host).unwrap();

    println!(
        "may dismiss the navigation sheet: {}",
        stack.should_dismiss(top).unwrap()
    );
}
