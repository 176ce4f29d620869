// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delivery of events along a route, and the per-sheet entry points hosts call.
//!
//! ## Usage
//!
//! - Feed gesture phases with [`SheetStack::handle_pan`].
//! - Report platform selection changes with [`SheetStack::selected_detent_changed`].
//! - Once per layout pass, call [`SheetStack::run_deferred`] for sheets with pending work.
//! - Route platform dismissal callbacks through [`SheetStack::should_dismiss`],
//!   [`SheetStack::will_dismiss`], [`SheetStack::did_dismiss`], and
//!   [`SheetStack::did_attempt_to_dismiss`], then remove the sheet with
//!   [`SheetStack::dismiss`].

use kurbo::Vec2;
use understory_sheet_interaction::{
    Events, GesturePhase, InteractionEvent, KeyboardEvent, SheetHost, SheetInteraction,
};

use crate::delegate::deliver;
use crate::stack::EntryKind;
use crate::{Delivery, Recipient, Route, SheetId, SheetStack, StackError, StackSurface};

impl SheetStack {
    /// Route `event` from `origin` and deliver it to every recipient in order.
    ///
    /// Returns the route that was used.
    pub fn dispatch(
        &mut self,
        origin: SheetId,
        event: &InteractionEvent,
    ) -> Result<Route, StackError> {
        let route = self.route(origin)?;
        tracing::debug!(?origin, event = event.name(), deliveries = route.len(), "dispatch");
        run(self, &route, event);
        Ok(route)
    }

    /// Feed one gesture phase to the sheet `id` and forward the resulting event.
    ///
    /// Gestures on a sheet that has another sheet presented over it are ignored.
    pub fn handle_pan<H: SheetHost + ?Sized>(
        &mut self,
        id: SheetId,
        host: &H,
        phase: GesturePhase,
        velocity: Vec2,
    ) -> Result<Events, StackError> {
        if let Some(over) = self.presented(id) {
            tracing::debug!(sheet = ?id, ?over, ?phase, "ignoring pan on covered sheet");
            self.node(id)?;
            return Ok(Events::new());
        }
        let interaction = self
            .node_mut(id)?
            .interaction_mut()
            .ok_or(StackError::NotParticipating(id))?;
        let mut events = Events::new();
        if let Some(event) = interaction.handle_pan(host, phase, velocity) {
            events.push(event);
        }
        self.dispatch_all(id, &events)?;
        Ok(events)
    }

    /// The platform changed the selected detent of the sheet `id`.
    pub fn selected_detent_changed(&mut self, id: SheetId) -> Result<(), StackError> {
        self.participant_mut(id)?.selected_detent_changed();
        Ok(())
    }

    /// Run the deferred work of the sheet `id` and forward what it produces.
    pub fn run_deferred<H: SheetHost + ?Sized>(
        &mut self,
        id: SheetId,
        host: &H,
    ) -> Result<Events, StackError> {
        let events = self.participant_mut(id)?.run_deferred(host);
        self.dispatch_all(id, &events)?;
        Ok(events)
    }

    /// The keyboard is about to appear over the sheet `id`.
    ///
    /// Only the sheet itself is told, through the top child of its navigation stack when it
    /// hosts one.
    pub fn keyboard_will_show<H: SheetHost + ?Sized>(
        &mut self,
        id: SheetId,
        host: &H,
    ) -> Result<Option<KeyboardEvent>, StackError> {
        let event = self.participant_mut(id)?.keyboard_will_show(host);
        if let Some(event) = &event {
            self.deliver_keyboard(id, event)?;
        }
        Ok(event)
    }

    /// The keyboard is about to disappear from the sheet `id`.
    pub fn keyboard_will_hide<H: SheetHost + ?Sized>(
        &mut self,
        id: SheetId,
        host: &H,
    ) -> Result<Option<KeyboardEvent>, StackError> {
        let event = self.participant_mut(id)?.keyboard_will_hide(host);
        if let Some(event) = &event {
            self.deliver_keyboard(id, event)?;
        }
        Ok(event)
    }

    /// Whether the sheet `id` may be dismissed by the user.
    ///
    /// Answered by the sheet's own surface. Without a surface, any sheet but the only one in
    /// its stack may be dismissed.
    pub fn should_dismiss(&self, id: SheetId) -> Result<bool, StackError> {
        let cx = self.context(id, id)?;
        Ok(match self.node(id)?.surface() {
            Some(surface) => surface.should_dismiss(&cx),
            None => !cx.is_single_sheet,
        })
    }

    /// The sheet `id` is about to be dismissed.
    pub fn will_dismiss(&mut self, id: SheetId) -> Result<Route, StackError> {
        self.dispatch(id, &InteractionEvent::WillDismiss)
    }

    /// The sheet `id` was dismissed by the platform. Call [`SheetStack::dismiss`] afterwards.
    pub fn did_dismiss(&mut self, id: SheetId) -> Result<Route, StackError> {
        self.dispatch(id, &InteractionEvent::DidDismiss)
    }

    /// A dismissal of the sheet `id` was refused.
    pub fn did_attempt_to_dismiss(&mut self, id: SheetId) -> Result<Route, StackError> {
        self.dispatch(id, &InteractionEvent::DidAttemptToDismiss)
    }

    fn dispatch_all(&mut self, origin: SheetId, events: &Events) -> Result<(), StackError> {
        for event in events {
            self.dispatch(origin, event)?;
        }
        Ok(())
    }

    fn participant_mut(
        &mut self,
        id: SheetId,
    ) -> Result<&mut SheetInteraction, StackError> {
        self.node_mut(id)?
            .interaction_mut()
            .ok_or(StackError::NotParticipating(id))
    }

    fn deliver_keyboard(&mut self, id: SheetId, event: &KeyboardEvent) -> Result<(), StackError> {
        let cx = self.context(id, id)?;
        let node = self.node_mut(id)?;
        let (target, cx): (Option<&mut (dyn StackSurface + 'static)>, _) =
            match node.navigation.as_mut().and_then(|nav| {
                let len = nav.len();
                let top = nav.top_index()?;
                Some((nav.child_mut(top)?, cx.for_navigation_child(top, len)))
            }) {
                Some((child, child_cx)) => (Some(child), child_cx),
                None => (node.surface.as_deref_mut(), cx),
            };
        let Some(target) = target else {
            tracing::debug!(sheet = ?id, "no surface to receive keyboard event");
            return Ok(());
        };
        match event {
            KeyboardEvent::WillShow { from } => target.keyboard_will_show(&cx, from),
            KeyboardEvent::WillHide { to } => target.keyboard_will_hide(&cx, to),
        }
        Ok(())
    }
}

/// Deliver `event` to each recipient of `route` in order.
///
/// Recipients that disappeared since the route was computed are skipped.
fn run(stack: &mut SheetStack, route: &[Delivery], event: &InteractionEvent) {
    for step in route {
        let id = step.recipient.sheet();
        let Some(entry) = stack.entry_opt_mut(id) else {
            continue;
        };
        match (step.recipient, &mut entry.kind) {
            (Recipient::Surface(_), EntryKind::Sheet(node)) => {
                if let Some(surface) = node.surface.as_deref_mut() {
                    deliver(surface, &step.cx, event);
                }
            }
            (Recipient::NavigationChild { index, .. }, EntryKind::Sheet(node)) => {
                if let Some(child) = node.navigation.as_mut().and_then(|n| n.child_mut(index)) {
                    deliver(child, &step.cx, event);
                }
            }
            (Recipient::RootPresenter(_), EntryKind::Root(Some(delegate))) => {
                deliver(delegate.as_mut(), &step.cx, event);
            }
            _ => {}
        }
    }
}
