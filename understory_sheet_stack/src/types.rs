// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the sheet stack: identifiers, delivery context, and dispatch recipients.

use smallvec::SmallVec;

/// Identifier for a presenter or sheet in a [`SheetStack`](crate::SheetStack).
///
/// A small, copyable handle made of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On dismissal, the slot is freed and every `SheetId` pointing at it becomes stale.
/// - A reused slot gets the next generation, so a stale id never aliases a new sheet.
/// - A slot whose generation reaches `u32::MAX` is retired instead of reused.
///
/// Use [`SheetStack::is_alive`](crate::SheetStack::is_alive) to check liveness.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SheetId(pub(crate) u32, pub(crate) u32);

impl SheetId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Where a delivery lands.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Recipient {
    /// The surface of a modal sheet.
    Surface(SheetId),
    /// A child surface inside a sheet's navigation stack, by index from the navigation root.
    NavigationChild {
        /// The sheet owning the navigation stack.
        sheet: SheetId,
        /// Index of the child, `0` being the navigation root.
        index: usize,
    },
    /// The non-modal presenter at the bottom of the stack.
    RootPresenter(SheetId),
}

impl Recipient {
    /// The stack node this recipient belongs to.
    pub fn sheet(self) -> SheetId {
        match self {
            Self::Surface(id) | Self::RootPresenter(id) => id,
            Self::NavigationChild { sheet, .. } => sheet,
        }
    }
}

/// What a surface learns about its position when asked to participate or handed an event.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SheetContext {
    /// The sheet whose interaction produced the event.
    pub origin: SheetId,
    /// The stack node being consulted.
    pub sheet: SheetId,
    /// Number of presenting links below `sheet`. The root presenter is at level `0`.
    pub level: usize,
    /// `sheet` has nothing presented over it.
    pub is_top_sheet: bool,
    /// `sheet` is the lowest modal sheet (level `1`).
    pub is_bottom_sheet: bool,
    /// `sheet` is both the top and the bottom sheet.
    pub is_single_sheet: bool,
    /// Index of the consulted child inside the sheet's navigation stack, if any.
    pub navigation_index: Option<usize>,
    /// The consulted child is the visible top of its navigation stack.
    /// Always `true` outside navigation stacks.
    pub is_top_of_navigation: bool,
}

impl SheetContext {
    /// The same context, pointed at a child of the sheet's navigation stack.
    #[must_use]
    pub fn for_navigation_child(self, index: usize, len: usize) -> Self {
        Self {
            navigation_index: Some(index),
            is_top_of_navigation: index + 1 == len,
            ..self
        }
    }
}

/// One step of a route: who receives the event and what they are told about their position.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Delivery {
    /// The receiver.
    pub recipient: Recipient,
    /// Context handed to the receiver.
    pub cx: SheetContext,
}

/// Ordered deliveries for one event, top of the stack first.
pub type Route = SmallVec<[Delivery; 4]>;
