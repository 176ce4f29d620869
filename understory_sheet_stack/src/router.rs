// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Route computation.
//!
//! ## Overview
//!
//! A route is computed fresh for every event by walking presenting links down from the
//! origin sheet. Nothing about the walk is cached, so dismissals between events are always
//! observed.
//!
//! ## Order
//!
//! - The origin sheet first, then each participating sheet below it, the root presenter last.
//! - Inside a sheet hosting a navigation stack, opted-in children come first, from the top of
//!   the navigation stack down, followed by the sheet's own surface.
//! - Each recipient appears at most once.
//!
//! ## Skips
//!
//! - A surface that declines [`should_handle_sheet_interaction`] is skipped but the walk goes on.
//! - Sheets without an interaction controller are passed over.
//! - The root presenter is included only when the origin asks for it through
//!   [`should_notify_root_presenter`] and the root has a delegate. A missing delegate is
//!   logged and skipped.
//!
//! [`should_handle_sheet_interaction`]: crate::ForwardingBehavior::should_handle_sheet_interaction
//! [`should_notify_root_presenter`]: crate::ForwardingBehavior::should_notify_root_presenter

use crate::stack::EntryKind;
use crate::{Delivery, Recipient, Route, SheetId, SheetStack, StackError};

impl SheetStack {
    /// Compute the ordered deliveries for an event originating at `origin`.
    ///
    /// `origin` must be a live sheet.
    pub fn route(&self, origin: SheetId) -> Result<Route, StackError> {
        let notify_root = self
            .node(origin)?
            .surface()
            .is_some_and(|s| s.should_notify_root_presenter());

        let mut route = Route::new();
        let mut cur = origin;
        loop {
            self.collect_sheet(origin, cur, &mut route)?;
            match self.next_participant(cur) {
                Next::Sheet(next) => cur = next,
                Next::Root(root) => {
                    if notify_root {
                        self.collect_root(origin, root, &mut route)?;
                    }
                    break;
                }
                Next::End => break,
            }
        }
        tracing::trace!(?origin, deliveries = route.len(), "sheet route computed");
        Ok(route)
    }

    fn collect_sheet(
        &self,
        origin: SheetId,
        sheet: SheetId,
        route: &mut Route,
    ) -> Result<(), StackError> {
        let node = self.node(sheet)?;
        let cx = self.context(origin, sheet)?;
        let handles = node
            .surface()
            .is_none_or(|s| s.should_handle_sheet_interaction(&cx));
        if !handles {
            tracing::trace!(?sheet, "surface declined sheet interaction");
            return Ok(());
        }
        if let Some(nav) = node.navigation() {
            let len = nav.len();
            for index in (0..len).rev() {
                let child_cx = cx.for_navigation_child(index, len);
                if nav
                    .child(index)
                    .is_some_and(|c| c.should_handle_sheet_interaction(&child_cx))
                {
                    route.push(Delivery {
                        recipient: Recipient::NavigationChild { sheet, index },
                        cx: child_cx,
                    });
                }
            }
        }
        if node.surface().is_some() {
            route.push(Delivery {
                recipient: Recipient::Surface(sheet),
                cx,
            });
        }
        Ok(())
    }

    fn collect_root(
        &self,
        origin: SheetId,
        root: SheetId,
        route: &mut Route,
    ) -> Result<(), StackError> {
        match &self.entry(root)?.kind {
            EntryKind::Root(Some(_)) => route.push(Delivery {
                recipient: Recipient::RootPresenter(root),
                cx: self.context(origin, root)?,
            }),
            EntryKind::Root(None) => {
                tracing::warn!(
                    ?root,
                    "root presenter cannot receive sheet interaction events; skipping"
                );
            }
            EntryKind::Sheet(_) => {}
        }
        Ok(())
    }

    fn next_participant(&self, from: SheetId) -> Next {
        let mut below = self.presenting(from);
        while let Some(id) = below {
            let Some(entry) = self.entry_opt(id) else {
                tracing::warn!(sheet = ?id, "presenting link is stale; ending walk");
                return Next::End;
            };
            match &entry.kind {
                EntryKind::Root(_) => return Next::Root(id),
                EntryKind::Sheet(node) if node.is_participating() => return Next::Sheet(id),
                EntryKind::Sheet(_) => {
                    tracing::trace!(sheet = ?id, "skipping non-participating sheet");
                    below = entry.presenting;
                }
            }
        }
        Next::End
    }
}

enum Next {
    Sheet(SheetId),
    Root(SheetId),
    End,
}
