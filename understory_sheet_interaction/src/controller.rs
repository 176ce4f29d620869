// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction lifecycle controller.
//!
//! ## Phases
//!
//! - `Began` records the origin detent and emits [`InteractionEvent::Began`].
//! - `Changed` runs the mapper and emits [`InteractionEvent::Changed`], unless the sheet's
//!   frame has not moved (a descendant scroll view is consuming the drag).
//! - `Ended`, `Cancelled` and `Failed` queue a deferred finish. The host drains the queue with
//!   [`SheetInteraction::run_deferred`] after its next layout pass, once the platform's selected
//!   detent has settled.
//!   The finish carries the released session's origin and last frame, so a drag that begins
//!   before the queue is drained is not disturbed by it.
//!
//! ## Ending
//!
//! The deferred finish emits [`InteractionEvent::WillEnd`] and sets
//! [`SheetInteraction::is_ending`]. [`InteractionEvent::DidEnd`] normally follows from the
//! platform's selection-changed callback ([`SheetInteraction::selected_detent_changed`]).
//! When the sheet settles back at its origin the platform sends no such callback, so the
//! controller synthesizes `DidEnd` itself and drops a late duplicate should one arrive.

use std::collections::VecDeque;

use kurbo::{Rect, Vec2};
use smallvec::SmallVec;
use understory_detent::DetentId;
use understory_sheet_layout::SheetLayout;

use crate::{
    DetentInfo, Directions, GesturePhase, InteractionChange, InteractionConfig, InteractionEnd,
    InteractionError, InteractionEvent, InvariantPolicy, KeyboardEvent, KeyboardObserver,
    PercentageMode, SheetHost, mapper,
};

/// Events produced by one call into the controller.
pub type Events = SmallVec<[InteractionEvent; 2]>;

#[derive(Clone, Debug, PartialEq)]
enum Deferred {
    FinishInteraction(TouchUp),
    SelectionChanged,
}

/// Session state captured at release, so a drag that starts before the deferred finish runs
/// keeps its own state.
#[derive(Clone, Debug, Default, PartialEq)]
struct TouchUp {
    origin: Option<DetentId>,
    frame: Option<Rect>,
    height: Option<f64>,
}

/// Tracks drag interactions on one sheet and turns them into [`InteractionEvent`]s.
///
/// The controller never reads platform state on its own; every call takes the
/// [`SheetHost`] it should consult.
#[derive(Debug, Default)]
pub struct SheetInteraction {
    config: InteractionConfig,
    origin_detent: Option<DetentId>,
    is_ending: bool,
    directions: Directions,
    frame_on_began: Option<Rect>,
    frame_on_previous_change: Option<Rect>,
    height_on_previous_change: Option<f64>,
    synthesized_did_end: Option<DetentId>,
    deferred: VecDeque<Deferred>,
    keyboard: KeyboardObserver,
}

impl SheetInteraction {
    /// Create a controller with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with `config`.
    pub fn with_config(config: InteractionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The controller's configuration.
    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// Label attached to this controller's log records.
    pub fn debug_label(&self) -> &str {
        &self.config.debug_label
    }

    /// Feed one phase of the sheet's drag gesture.
    ///
    /// `velocity` is the gesture velocity in window coordinates. Terminal phases return `None`
    /// and queue work for [`SheetInteraction::run_deferred`].
    pub fn handle_pan<H: SheetHost + ?Sized>(
        &mut self,
        host: &H,
        phase: GesturePhase,
        velocity: Vec2,
    ) -> Option<InteractionEvent> {
        tracing::trace!(label = %self.config.debug_label, ?phase, "sheet pan");
        match phase {
            GesturePhase::Began => self.began(host),
            GesturePhase::Changed => {
                let result = self.changed(host, velocity);
                self.recover(result).flatten().map(InteractionEvent::Changed)
            }
            GesturePhase::Ended | GesturePhase::Cancelled | GesturePhase::Failed => {
                if phase != GesturePhase::Ended {
                    tracing::debug!(
                        label = %self.config.debug_label,
                        ?phase,
                        "sheet interaction finished without a clean release"
                    );
                }
                let touch_up = self.release();
                self.deferred.push_back(Deferred::FinishInteraction(touch_up));
                None
            }
        }
    }

    /// The platform reported a new selected detent.
    ///
    /// The resulting [`InteractionEvent::DidEnd`] is produced by the next
    /// [`SheetInteraction::run_deferred`].
    pub fn selected_detent_changed(&mut self) {
        self.deferred.push_back(Deferred::SelectionChanged);
    }

    /// Whether deferred work is waiting for [`SheetInteraction::run_deferred`].
    pub fn has_deferred(&self) -> bool {
        !self.deferred.is_empty()
    }

    /// Run all deferred work in the order it was queued.
    ///
    /// Call once per layout pass, after the platform has applied its detent selection.
    pub fn run_deferred<H: SheetHost + ?Sized>(&mut self, host: &H) -> Events {
        let mut events = Events::new();
        while let Some(task) = self.deferred.pop_front() {
            match task {
                Deferred::FinishInteraction(touch_up) => {
                    self.finish_interaction(host, touch_up, &mut events);
                }
                Deferred::SelectionChanged => self.selection_changed(host, &mut events),
            }
        }
        events
    }

    /// The keyboard is about to appear over this sheet.
    pub fn keyboard_will_show<H: SheetHost + ?Sized>(&mut self, host: &H) -> Option<KeyboardEvent> {
        tracing::debug!(label = %self.config.debug_label, "keyboard will show");
        let result = self.keyboard.will_show(host.detents());
        self.recover(result.map_err(InteractionError::from)).flatten()
    }

    /// The keyboard finished appearing.
    pub fn keyboard_did_show(&self) {
        tracing::debug!(label = %self.config.debug_label, "keyboard did show");
    }

    /// The keyboard is about to disappear from this sheet.
    pub fn keyboard_will_hide<H: SheetHost + ?Sized>(&mut self, host: &H) -> Option<KeyboardEvent> {
        tracing::debug!(label = %self.config.debug_label, "keyboard will hide");
        let result = self.keyboard.will_hide(host.detents());
        self.recover(result.map_err(InteractionError::from)).flatten()
    }

    /// Keyboard pinning state.
    pub fn keyboard(&self) -> &KeyboardObserver {
        &self.keyboard
    }

    /// The detent the current drag began at. `None` outside a drag.
    pub fn origin_detent(&self) -> Option<&DetentId> {
        self.origin_detent.as_ref()
    }

    /// `true` between `WillEnd` and `DidEnd`.
    ///
    /// A very quick flick may reach `DidEnd` without this ever being set.
    pub fn is_ending(&self) -> bool {
        self.is_ending
    }

    /// Directions of the most recent drag sample.
    pub fn current_directions(&self) -> Directions {
        self.directions
    }

    /// The most recent drag sample moved down.
    pub fn is_minimizing(&self) -> bool {
        self.directions.contains(Directions::DOWN)
    }

    /// Total percentage of the sheet's current frame, in the configured mode.
    ///
    /// Reports `0` when the detent set is broken and the policy is
    /// [`InvariantPolicy::Recover`].
    pub fn total_percentage_animated<H: SheetHost + ?Sized>(&self, host: &H) -> f64 {
        self.total_percentage_animated_in(host, self.config.percentage_mode)
    }

    /// Total percentage of the sheet's current frame, in an explicit mode.
    pub fn total_percentage_animated_in<H: SheetHost + ?Sized>(
        &self,
        host: &H,
        mode: PercentageMode,
    ) -> f64 {
        let layout = host.layout();
        let result = mapper::percentage_total(
            host.detents(),
            &layout,
            layout.sheet_frame_in_window(),
            mode,
        );
        self.recover(result.map_err(InteractionError::from))
            .unwrap_or(0.0)
    }

    /// [`animating`](crate::animating) with this controller's current directions.
    pub fn animating(&self, detent: &DetentId, change: &InteractionChange) -> Option<f64> {
        mapper::animating(detent, change, self.directions)
    }

    fn began<H: SheetHost + ?Sized>(&mut self, host: &H) -> Option<InteractionEvent> {
        let result = host.detents().identifier_for_selected().cloned();
        let origin = self.recover(result.map_err(InteractionError::from))?;
        tracing::debug!(label = %self.config.debug_label, detent = %origin, "interaction began");
        self.origin_detent = Some(origin.clone());
        self.frame_on_began = Some(host.layout().sheet_frame_in_window());
        self.synthesized_did_end = None;
        Some(InteractionEvent::Began { detent: origin })
    }

    fn changed<H: SheetHost + ?Sized>(
        &mut self,
        host: &H,
        velocity: Vec2,
    ) -> Result<Option<InteractionChange>, InteractionError> {
        let directions = Directions::from_velocity(velocity);
        self.directions = directions;
        if directions.is_stationary() {
            return Err(InteractionError::StationarySample);
        }
        if !directions.has_vertical_component() {
            tracing::trace!(label = %self.config.debug_label, %directions, "no vertical component");
            return Ok(None);
        }

        let layout = host.layout();
        let frame = layout.sheet_frame_in_window();
        if self
            .frame_on_began
            .is_some_and(|began| began.origin() == frame.origin())
        {
            tracing::debug!(
                label = %self.config.debug_label,
                "ignoring change: sheet has not moved since the drag began"
            );
            return Ok(None);
        }
        self.frame_on_began = None;
        if self
            .frame_on_previous_change
            .is_some_and(|prev| prev.origin() == frame.origin())
        {
            tracing::debug!(
                label = %self.config.debug_label,
                "ignoring change: sheet frame unchanged, a descendant scroll view likely owns the drag"
            );
            return Ok(None);
        }
        self.frame_on_previous_change = Some(frame);
        self.height_on_previous_change = Some(layout.sheet_height_in_safe_area());

        let change = mapper::map_sample(
            host.detents(),
            &layout,
            directions,
            PercentageMode::ActiveDetents,
        )?;
        tracing::trace!(
            label = %self.config.debug_label,
            closest = %change.closest.detent,
            approaching = %change.approaching.detent,
            preceding = %change.preceding.detent,
            percentage = change.percentage_approaching.value(),
            total = change.percentage_total,
            "interaction changed"
        );
        Ok(Some(change))
    }

    fn release(&mut self) -> TouchUp {
        self.frame_on_began = None;
        TouchUp {
            origin: self.origin_detent.take(),
            frame: self.frame_on_previous_change.take(),
            height: self.height_on_previous_change.take(),
        }
    }

    fn finish_interaction<H: SheetHost + ?Sized>(
        &mut self,
        host: &H,
        touch_up: TouchUp,
        events: &mut Events,
    ) {
        let layout = host.layout();
        let detents = host.detents();
        let result = Self::interaction_end(&layout, host, &touch_up);
        let origin = touch_up.origin;
        let Some(end) = self.recover(result) else {
            return;
        };
        tracing::debug!(
            label = %self.config.debug_label,
            target = %end.target.detent,
            distance = end.target.distance,
            on_touch_up = end.on_touch_up_percentage_total,
            "interaction will end"
        );

        self.is_ending = true;
        let target = end.target.detent.clone();
        events.push(InteractionEvent::WillEnd(end));

        let still_selected = detents
            .identifier_for_selected()
            .is_ok_and(|selected| *selected == target);
        if origin.as_ref() == Some(&target) && still_selected {
            // The platform sends no selection change for an unchanged detent.
            self.synthesized_did_end = Some(target.clone());
            events.push(self.did_end(target));
        }
    }

    fn interaction_end<H: SheetHost + ?Sized>(
        layout: &SheetLayout,
        host: &H,
        touch_up: &TouchUp,
    ) -> Result<InteractionEnd, InteractionError> {
        let detents = host.detents();
        let target = detents.identifier_for_selected()?.clone();
        let cx = layout.resolution_context();
        let target_height = detents.resolve(&target, &cx)?;

        let current = layout.sheet_frame_in_window();
        let sheet_height = touch_up
            .height
            .unwrap_or_else(|| layout.sheet_height_in_safe_area());
        let touch_up_frame = touch_up.frame.unwrap_or(current);
        let mode = PercentageMode::ActiveDetents;
        let on_touch_up = mapper::percentage_total(detents, layout, touch_up_frame, mode)?;
        let targeting = mapper::percentage_total(detents, layout, current, mode)?;

        Ok(InteractionEnd {
            target: DetentInfo {
                detent: target,
                distance: (sheet_height - target_height).abs(),
            },
            target_percentage_total: targeting,
            on_touch_up_percentage_total: on_touch_up,
        })
    }

    fn selection_changed<H: SheetHost + ?Sized>(&mut self, host: &H, events: &mut Events) {
        let detents = host.detents();
        let selected = match detents.selected() {
            Some(id) => Ok(id.clone()),
            None => detents
                .identifier_for_smallest(true, &host.layout().resolution_context())
                .cloned(),
        };
        let Some(selected) = self.recover(selected.map_err(InteractionError::from)) else {
            return;
        };
        if self.synthesized_did_end.take().as_ref() == Some(&selected) {
            tracing::debug!(
                label = %self.config.debug_label,
                detent = %selected,
                "dropping duplicate did_end"
            );
            return;
        }
        events.push(self.did_end(selected));
    }

    fn did_end(&mut self, detent: DetentId) -> InteractionEvent {
        if !self.is_ending {
            tracing::debug!(label = %self.config.debug_label, "interaction ended without will_end");
        }
        self.is_ending = false;
        tracing::debug!(label = %self.config.debug_label, %detent, "interaction did end");
        InteractionEvent::DidEnd { detent }
    }

    fn recover<T>(&self, result: Result<T, InteractionError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => match self.config.invariant_policy {
                InvariantPolicy::Panic => {
                    panic!("sheet interaction invariant violated: {err}")
                }
                InvariantPolicy::Recover => {
                    tracing::error!(label = %self.config.debug_label, %err, "sheet interaction invariant violated");
                    None
                }
            },
        }
    }
}
