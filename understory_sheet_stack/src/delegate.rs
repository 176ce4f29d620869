// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Receiver traits.

use understory_detent::DetentId;
use understory_sheet_interaction::{InteractionChange, InteractionEnd, InteractionEvent};

use crate::SheetContext;

/// Receives interaction notifications.
///
/// The four lifecycle methods are required. Dismissal and keyboard notifications default to
/// no-ops, and [`should_dismiss`](Self::should_dismiss) defaults to allowing dismissal of
/// every sheet except the only one in the stack.
pub trait SheetInteractionDelegate {
    /// A drag began at `detent`.
    fn began(&mut self, cx: &SheetContext, detent: &DetentId);

    /// The drag moved. Stationary and horizontal-only samples are never delivered.
    fn changed(&mut self, cx: &SheetContext, change: &InteractionChange);

    /// The drag was released; animate toward `end.target`.
    ///
    /// A very quick flick may skip this and go straight to [`did_end`](Self::did_end).
    fn will_end(&mut self, cx: &SheetContext, end: &InteractionEnd);

    /// The sheet came to rest at `detent`.
    fn did_end(&mut self, cx: &SheetContext, detent: &DetentId);

    /// Whether the sheet `cx.sheet` may be dismissed by the user.
    fn should_dismiss(&self, cx: &SheetContext) -> bool {
        !cx.is_single_sheet
    }

    /// The origin sheet is about to be dismissed.
    fn will_dismiss(&mut self, cx: &SheetContext) {
        let _ = cx;
    }

    /// The origin sheet was dismissed.
    fn did_dismiss(&mut self, cx: &SheetContext) {
        let _ = cx;
    }

    /// A dismissal was refused by [`should_dismiss`](Self::should_dismiss).
    fn did_attempt_to_dismiss(&mut self, cx: &SheetContext) {
        let _ = cx;
    }

    /// The keyboard is appearing; the sheet was at `from`.
    fn keyboard_will_show(&mut self, cx: &SheetContext, from: &DetentId) {
        let _ = (cx, from);
    }

    /// The keyboard is going away; the sheet returns to `to`.
    fn keyboard_will_hide(&mut self, cx: &SheetContext, to: &DetentId) {
        let _ = (cx, to);
    }
}

/// A sheet surface's participation policy.
pub trait ForwardingBehavior {
    /// Whether this surface should receive the event right now.
    ///
    /// Returning `false` from a top sheet temporarily mutes its own notifications without
    /// stopping the walk down the stack.
    fn should_handle_sheet_interaction(&self, cx: &SheetContext) -> bool;

    /// Whether an event originating at this sheet should also reach the stack's root presenter.
    ///
    /// Only consulted on the origin sheet.
    fn should_notify_root_presenter(&self) -> bool;
}

/// A sheet surface: both a delegate and a forwarding policy.
pub trait StackSurface: SheetInteractionDelegate + ForwardingBehavior {}

impl<T: SheetInteractionDelegate + ForwardingBehavior + ?Sized> StackSurface for T {}

/// Hand `event` to the matching method of `delegate`.
pub(crate) fn deliver<D: SheetInteractionDelegate + ?Sized>(
    delegate: &mut D,
    cx: &SheetContext,
    event: &InteractionEvent,
) {
    match event {
        InteractionEvent::Began { detent } => delegate.began(cx, detent),
        InteractionEvent::Changed(change) => delegate.changed(cx, change),
        InteractionEvent::WillEnd(end) => delegate.will_end(cx, end),
        InteractionEvent::DidEnd { detent } => delegate.did_end(cx, detent),
        InteractionEvent::WillDismiss => delegate.will_dismiss(cx),
        InteractionEvent::DidDismiss => delegate.did_dismiss(cx),
        InteractionEvent::DidAttemptToDismiss => delegate.did_attempt_to_dismiss(cx),
    }
}
