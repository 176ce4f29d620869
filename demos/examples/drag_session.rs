// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session.
//!
//! Drive one sheet from `medium` up toward `large` with a scripted host, printing each
//! change and the end-of-drag events.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example drag_session`

use kurbo::{Insets, Rect, Vec2};
use tracing_subscriber::EnvFilter;
use understory_detent::{DetentSet, TraitSnapshot, presets};
use understory_sheet_interaction::{
    GesturePhase, InteractionConfig, InteractionEvent, PercentageMode, SheetInteraction,
    SheetSnapshot,
};
use understory_sheet_layout::SheetLayout;

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
    let mut sheet =
        SheetInteraction::with_config(InteractionConfig::default().with_debug_label("demo"));

    let up = Vec2::new(4.0, -620.0);
    println!("began: {:?}", sheet.handle_pan(&host, GesturePhase::Began, up));

    for height in [420.0, 500.0, 600.0, 690.0, 730.0] {
        host.layout = layout.with_sheet_height(height);
        if let Some(InteractionEvent::Changed(change)) =
            sheet.handle_pan(&host, GesturePhase::Changed, up)
        {
            println!(
                "h={height:>6.1}  closest={:<6} approaching={:<6} ({:>6.3})  preceding={:<6} ({:>6.3})  total={:.3}{}",
                change.closest.detent,
                change.approaching.detent,
                change.percentage_approaching.value(),
                change.preceding.detent,
                change.percentage_preceding.value(),
                change.percentage_total,
                if change.is_overscrolling {
                    "  overscrolling"
                } else {
                    ""
                },
            );
        }
    }
    println!(
        "safe-area total at release: {:.3}",
        sheet.total_percentage_animated_in(&host, PercentageMode::SafeArea)
    );

    sheet.handle_pan(&host, GesturePhase::Ended, up);

    // The platform settles on `large` and reports the new selection.
    host.detents.set_selected(Some(presets::LARGE));
    host.layout = layout.with_sheet_height(711.55);
    sheet.selected_detent_changed();
    for event in sheet.run_deferred(&host) {
        println!("{}: {event:?}", event.name());
    }
}
