// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end drag sessions against a scripted host.

use kurbo::{Insets, Rect, Vec2};
use understory_detent::{DetentSet, TraitSnapshot, presets};
use understory_sheet_interaction::{
    GesturePhase, InteractionEvent, Progress, SheetInteraction, SheetSnapshot,
};
use understory_sheet_layout::SheetLayout;

const UP: Vec2 = Vec2::new(12.0, -480.0);
const DOWN: Vec2 = Vec2::new(-3.0, 620.0);

fn layout() -> SheetLayout {
    SheetLayout::new(
        Rect::new(0.0, 0.0, 393.0, 852.0),
        Insets::new(0.0, 59.0, 0.0, 34.0),
        TraitSnapshot::PHONE_PORTRAIT,
    )
}

fn host_at(height: f64) -> SheetSnapshot {
    let detents = DetentSet::new([presets::small(), presets::medium(), presets::large()])
        .with_selected(presets::MEDIUM);
    SheetSnapshot::new(layout().with_sheet_height(height), detents)
}

fn drag_to(
    sheet: &mut SheetInteraction,
    host: &mut SheetSnapshot,
    height: f64,
    velocity: Vec2,
) -> Option<InteractionEvent> {
    host.layout = layout().with_sheet_height(height);
    sheet.handle_pan(&*host, GesturePhase::Changed, velocity)
}

fn change_of(event: Option<InteractionEvent>) -> understory_sheet_interaction::InteractionChange {
    match event {
        Some(InteractionEvent::Changed(change)) => change,
        other => panic!("expected a change event, got {other:?}"),
    }
}

#[test]
fn worked_scenario_medium_toward_large() {
    let mut host = host_at(374.5);
    let mut sheet = SheetInteraction::new();
    assert_eq!(
        sheet.handle_pan(&host, GesturePhase::Began, UP),
        Some(InteractionEvent::Began {
            detent: presets::MEDIUM
        })
    );

    let change = change_of(drag_to(&mut sheet, &mut host, 500.0, UP));
    assert_eq!(change.approaching.detent, presets::LARGE);
    assert!((change.approaching.distance - 211.55).abs() < 1e-9);
    assert_eq!(change.preceding.detent, presets::MEDIUM);
    assert!((change.preceding.distance - 125.5).abs() < 1e-9);
    let p = change.percentage_approaching.value();
    assert!((p - 0.3723).abs() < 1e-3, "percentage {p}");
    assert!(!sheet.is_minimizing());
}

#[test]
fn overscroll_reports_sentinel_never_nan() {
    let mut host = host_at(711.55);
    let mut sheet = SheetInteraction::new();
    sheet.handle_pan(&host, GesturePhase::Began, UP);

    for height in [720.0, 735.0, 749.0] {
        let change = change_of(drag_to(&mut sheet, &mut host, height, UP));
        assert!(change.is_overscrolling);
        assert_eq!(change.preceding.detent, change.approaching.detent);
        assert_eq!(change.percentage_approaching, Progress::Overscrolling);
        assert_eq!(change.percentage_approaching.value(), -1.0);
        assert_eq!(change.percentage_preceding.value(), -1.0);
        assert!(change.percentage_total.is_finite());
    }
}

#[test]
fn percentages_are_complementary_while_not_overscrolling() {
    let mut host = host_at(56.0);
    let mut sheet = SheetInteraction::new();
    sheet.handle_pan(&host, GesturePhase::Began, UP);

    let mut height = 60.0;
    while height < 705.0 {
        let change = change_of(drag_to(&mut sheet, &mut host, height, UP));
        assert!(!change.is_overscrolling, "at {height}");
        let sum = change.percentage_approaching.value() + change.percentage_preceding.value();
        assert!((sum - 1.0).abs() < 1e-9, "at {height}: {sum}");
        height += 37.0;
    }
    while height > 60.0 {
        height -= 41.0;
        let change = change_of(drag_to(&mut sheet, &mut host, height, DOWN));
        assert!(sheet.is_minimizing());
        if !change.is_overscrolling {
            let sum =
                change.percentage_approaching.value() + change.percentage_preceding.value();
            assert!((sum - 1.0).abs() < 1e-9, "at {height}: {sum}");
        }
    }
}

#[test]
fn release_at_origin_synthesizes_exactly_one_did_end() {
    let mut host = host_at(374.5);
    let mut sheet = SheetInteraction::new();
    sheet.handle_pan(&host, GesturePhase::Began, UP);
    drag_to(&mut sheet, &mut host, 410.0, UP);
    sheet.handle_pan(&host, GesturePhase::Ended, DOWN);

    // The platform springs back to medium. Selection is unchanged.
    host.layout = layout().with_sheet_height(374.5);
    let events = sheet.run_deferred(&host);
    assert_eq!(events.len(), 2);
    let InteractionEvent::WillEnd(end) = &events[0] else {
        panic!("expected will_end, got {:?}", events[0]);
    };
    assert_eq!(end.target.detent, presets::MEDIUM);
    assert!((end.target.distance - 35.5).abs() < 1e-9);
    assert!(end.on_touch_up_percentage_total > end.target_percentage_total);
    assert_eq!(
        events[1],
        InteractionEvent::DidEnd {
            detent: presets::MEDIUM
        }
    );
    assert!(!sheet.is_ending());

    // A late platform callback for the same detent does not produce a second did_end.
    sheet.selected_detent_changed();
    assert!(sheet.run_deferred(&host).is_empty());
}

#[test]
fn release_elsewhere_waits_for_platform_selection() {
    let mut host = host_at(374.5);
    let mut sheet = SheetInteraction::new();
    sheet.handle_pan(&host, GesturePhase::Began, DOWN);
    drag_to(&mut sheet, &mut host, 200.0, DOWN);
    sheet.handle_pan(&host, GesturePhase::Ended, DOWN);

    host.detents.set_selected(Some(presets::SMALL));
    host.layout = layout().with_sheet_height(56.0);
    let events = sheet.run_deferred(&host);
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], InteractionEvent::WillEnd(_)));
    assert!(sheet.is_ending());
    assert_eq!(sheet.origin_detent(), None);

    sheet.selected_detent_changed();
    let events = sheet.run_deferred(&host);
    assert_eq!(
        events.as_slice(),
        &[InteractionEvent::DidEnd {
            detent: presets::SMALL
        }]
    );
    assert!(!sheet.is_ending());
}

#[test]
fn quick_flick_can_reach_did_end_without_will_end() {
    let host = host_at(374.5);
    let mut sheet = SheetInteraction::new();
    sheet.selected_detent_changed();
    let events = sheet.run_deferred(&host);
    assert_eq!(
        events.as_slice(),
        &[InteractionEvent::DidEnd {
            detent: presets::MEDIUM
        }]
    );
}

#[test]
fn cancelled_gesture_still_finishes() {
    let mut host = host_at(374.5);
    let mut sheet = SheetInteraction::new();
    sheet.handle_pan(&host, GesturePhase::Began, UP);
    drag_to(&mut sheet, &mut host, 380.0, UP);
    assert_eq!(sheet.handle_pan(&host, GesturePhase::Cancelled, UP), None);
    host.layout = layout().with_sheet_height(374.5);
    let events = sheet.run_deferred(&host);
    assert_eq!(events.len(), 2);
}

#[test]
fn new_session_may_start_before_deferred_work_runs() {
    let mut host = host_at(374.5);
    let mut sheet = SheetInteraction::new();
    sheet.handle_pan(&host, GesturePhase::Began, UP);
    drag_to(&mut sheet, &mut host, 600.0, UP);
    sheet.handle_pan(&host, GesturePhase::Ended, UP);

    host.detents.set_selected(Some(presets::LARGE));
    host.layout = layout().with_sheet_height(711.55);
    sheet.selected_detent_changed();

    // The next drag starts before the host's layout pass.
    assert_eq!(
        sheet.handle_pan(&host, GesturePhase::Began, DOWN),
        Some(InteractionEvent::Began {
            detent: presets::LARGE
        })
    );
    let events = sheet.run_deferred(&host);
    assert!(matches!(events[0], InteractionEvent::WillEnd(_)));
    assert_eq!(
        events.last(),
        Some(&InteractionEvent::DidEnd {
            detent: presets::LARGE
        })
    );
}

#[test]
fn second_session_released_at_origin_still_ends_once() {
    let mut host = host_at(374.5);
    let mut sheet = SheetInteraction::new();
    sheet.handle_pan(&host, GesturePhase::Began, UP);
    drag_to(&mut sheet, &mut host, 600.0, UP);
    sheet.handle_pan(&host, GesturePhase::Ended, UP);

    host.detents.set_selected(Some(presets::LARGE));
    host.layout = layout().with_sheet_height(711.55);
    sheet.selected_detent_changed();

    // The second drag begins before the first one's deferred work runs.
    sheet.handle_pan(&host, GesturePhase::Began, DOWN);
    let events = sheet.run_deferred(&host);
    assert!(matches!(events[0], InteractionEvent::WillEnd(_)));
    assert_eq!(
        events[1],
        InteractionEvent::DidEnd {
            detent: presets::LARGE
        }
    );
    assert_eq!(sheet.origin_detent(), Some(&presets::LARGE));

    drag_to(&mut sheet, &mut host, 690.0, DOWN);
    sheet.handle_pan(&host, GesturePhase::Ended, UP);
    host.layout = layout().with_sheet_height(711.55);
    let events = sheet.run_deferred(&host);
    let did_ends = events
        .iter()
        .filter(|e| matches!(e, InteractionEvent::DidEnd { .. }))
        .count();
    assert_eq!(did_ends, 1, "{events:?}");
    assert_eq!(
        events.last(),
        Some(&InteractionEvent::DidEnd {
            detent: presets::LARGE
        })
    );

    sheet.selected_detent_changed();
    assert!(sheet.run_deferred(&host).is_empty());
}
