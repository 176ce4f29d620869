// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Forwarding inside a sheet's own navigation stack.
//!
//! A sheet hosting a navigation stack shows one child at a time but all children share the
//! sheet's single interaction. The router relays each event to the children from the top of
//! the navigation stack down to its root, then to the sheet's own surface. A child receives
//! the event only if it opts in, typically only while it is the visible top.

use core::fmt;

use crate::StackSurface;

/// The children of a sheet's navigation stack, in push order.
#[derive(Default)]
pub struct NavigationForwarding {
    children: Vec<Box<dyn StackSurface>>,
}

impl fmt::Debug for NavigationForwarding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationForwarding")
            .field("len", &self.children.len())
            .finish_non_exhaustive()
    }
}

impl NavigationForwarding {
    /// Create an empty navigation stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a child on top.
    pub fn push(&mut self, child: impl StackSurface + 'static) {
        self.children.push(Box::new(child));
    }

    /// Builder-style variant of [`NavigationForwarding::push`].
    #[must_use]
    pub fn with_child(mut self, child: impl StackSurface + 'static) -> Self {
        self.push(child);
        self
    }

    /// Pop the top child.
    pub fn pop(&mut self) -> Option<Box<dyn StackSurface>> {
        self.children.pop()
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if no child has been pushed.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Index of the visible child.
    pub fn top_index(&self) -> Option<usize> {
        self.children.len().checked_sub(1)
    }

    /// Child at `index`, counted from the navigation root.
    pub fn child(&self, index: usize) -> Option<&dyn StackSurface> {
        self.children.get(index).map(|c| &**c)
    }

    /// Mutable child at `index`, counted from the navigation root.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut (dyn StackSurface + 'static)> {
        self.children.get_mut(index).map(|c| &mut **c)
    }
}
