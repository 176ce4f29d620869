// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host seam: where a controller reads geometry and detents from.

use understory_detent::DetentSet;
use understory_sheet_layout::SheetLayout;

/// Geometry and detent source for one sheet.
///
/// Implemented by whatever owns the platform sheet. Both methods are called fresh on every
/// query; implementations must report the current state, not a cached one.
pub trait SheetHost {
    /// Current geometry of the sheet and its window.
    fn layout(&self) -> SheetLayout;
    /// The sheet's detents and current selection.
    fn detents(&self) -> &DetentSet;
}

impl<T: SheetHost + ?Sized> SheetHost for &T {
    fn layout(&self) -> SheetLayout {
        (**self).layout()
    }

    fn detents(&self) -> &DetentSet {
        (**self).detents()
    }
}

/// A plain-data [`SheetHost`].
#[derive(Clone, Debug, Default)]
pub struct SheetSnapshot {
    /// Geometry.
    pub layout: SheetLayout,
    /// Detents and selection.
    pub detents: DetentSet,
}

impl SheetSnapshot {
    /// Pair a layout with a detent set.
    pub fn new(layout: SheetLayout, detents: DetentSet) -> Self {
        Self { layout, detents }
    }
}

impl SheetHost for SheetSnapshot {
    fn layout(&self) -> SheetLayout {
        self.layout
    }

    fn detents(&self) -> &DetentSet {
        &self.detents
    }
}
