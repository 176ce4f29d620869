// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sheet geometry snapshot and derived insets.

use kurbo::{Affine, Insets, Rect};
use understory_detent::{Idiom, ResolutionContext, TraitSnapshot};

use crate::InsetTable;

/// A snapshot of the geometry a sheet is laid out in.
///
/// Fields are plain data supplied by the host each frame. Every derived value is
/// recomputed on demand; nothing is memoized.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SheetLayout {
    /// Window bounds in window coordinates (origin at the window's top-left).
    pub window: Rect,
    /// Window safe-area insets. Only `y0` (top) and `y1` (bottom) are consulted.
    pub safe_area: Insets,
    /// Frame of the sheet's root view in its parent's coordinate space.
    pub sheet_frame: Rect,
    /// Transform from the sheet's parent space into window space.
    pub sheet_transform: Affine,
    /// Container traits of the sheet.
    pub traits: TraitSnapshot,
    /// Inset constants for the device class.
    pub table: InsetTable,
}

impl SheetLayout {
    /// Create a layout for a window with the given safe area. The sheet frame starts empty.
    pub fn new(window: Rect, safe_area: Insets, traits: TraitSnapshot) -> Self {
        Self {
            window,
            safe_area,
            sheet_frame: Rect::ZERO,
            sheet_transform: Affine::IDENTITY,
            traits,
            table: InsetTable::PLATFORM,
        }
    }

    /// Builder-style setter for [`SheetLayout::sheet_frame`].
    #[must_use]
    pub fn with_sheet_frame(mut self, frame: Rect) -> Self {
        self.sheet_frame = frame;
        self
    }

    /// Builder-style setter for [`SheetLayout::sheet_transform`].
    #[must_use]
    pub fn with_sheet_transform(mut self, transform: Affine) -> Self {
        self.sheet_transform = transform;
        self
    }

    /// Builder-style setter for [`SheetLayout::table`].
    #[must_use]
    pub fn with_inset_table(mut self, table: InsetTable) -> Self {
        self.table = table;
        self
    }

    /// Place the sheet so its top edge sits `height` points above the bottom safe-area inset.
    ///
    /// The frame spans the window width and extends to the window's bottom edge.
    #[must_use]
    pub fn with_sheet_height(mut self, height: f64) -> Self {
        let y0 = self.detent_origin_y(height);
        self.sheet_frame = Rect::new(self.window.x0, y0, self.window.x1, self.window.height());
        self.sheet_transform = Affine::IDENTITY;
        self
    }

    /// The sheet's bounding box in window coordinates.
    ///
    /// Conservative under rotation or shear in [`SheetLayout::sheet_transform`].
    pub fn sheet_frame_in_window(&self) -> Rect {
        self.sheet_transform.transform_rect_bbox(self.sheet_frame)
    }

    /// Sheet height inside the safe area: frame height minus the bottom inset.
    pub fn sheet_height_in_safe_area(&self) -> f64 {
        self.sheet_frame_in_window().height() - self.sheet_bottom_inset()
    }

    /// Insets of the sheet visually underneath in a stack.
    pub fn bottom_sheet_insets(&self) -> Insets {
        Insets::new(
            0.0,
            self.bottom_sheet_top_inset(),
            0.0,
            self.sheet_bottom_inset(),
        )
    }

    /// Insets of the sheet at the front of a stack.
    pub fn top_sheet_insets(&self) -> Insets {
        Insets::new(0.0, self.top_sheet_top_inset(), 0.0, self.sheet_bottom_inset())
    }

    /// Height available to the top sheet inside the window's safe area.
    ///
    /// This is the value detent resolvers see as
    /// [`ResolutionContext::maximum_detent_value`].
    pub fn maximum_detent_value(&self) -> f64 {
        let insets = self.top_sheet_insets();
        self.window.height() - (insets.y0 + insets.y1)
    }

    /// A fresh resolution context for the current geometry.
    pub fn resolution_context(&self) -> ResolutionContext {
        ResolutionContext::new(self.traits, self.maximum_detent_value())
    }

    /// Window-space Y of a sheet's top edge when it rests at a detent of `height`.
    pub fn detent_origin_y(&self, height: f64) -> f64 {
        self.window.height() - (height + self.sheet_bottom_inset())
    }

    /// Whether the window has no bottom safe-area inset (a home-button device).
    pub fn has_home_button(&self) -> bool {
        self.safe_area.y1 <= 0.0
    }

    fn sheet_bottom_inset(&self) -> f64 {
        self.safe_area.y1
    }

    fn bottom_sheet_top_inset(&self) -> f64 {
        let top = self.safe_area.y0;
        if self.has_home_button() {
            return top + self.table.home_button_top_inset;
        }
        match self.traits.idiom {
            Idiom::Pad => top + self.table.pad_bottom_sheet_top_inset,
            Idiom::Phone | Idiom::Other => top,
        }
    }

    fn top_sheet_top_inset(&self) -> f64 {
        let peek = self.table.peek_through(&self.traits);
        if self.has_home_button() {
            self.bottom_sheet_top_inset() + peek
        } else {
            self.safe_area.y0 + peek
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    fn phone_with_indicator() -> SheetLayout {
        SheetLayout::new(
            Rect::new(0.0, 0.0, 393.0, 852.0),
            Insets::new(0.0, 59.0, 0.0, 34.0),
            TraitSnapshot::PHONE_PORTRAIT,
        )
    }

    fn phone_with_home_button() -> SheetLayout {
        SheetLayout::new(
            Rect::new(0.0, 0.0, 375.0, 667.0),
            Insets::new(0.0, 20.0, 0.0, 0.0),
            TraitSnapshot::PHONE_PORTRAIT,
        )
    }

    #[test]
    fn maximum_detent_value_home_indicator() {
        let l = phone_with_indicator();
        assert_eq!(l.top_sheet_insets(), Insets::new(0.0, 69.0, 0.0, 34.0));
        assert_eq!(l.bottom_sheet_insets(), Insets::new(0.0, 59.0, 0.0, 34.0));
        assert_eq!(l.maximum_detent_value(), 749.0);
    }

    #[test]
    fn maximum_detent_value_home_button() {
        let l = phone_with_home_button();
        assert_eq!(l.bottom_sheet_insets().y0, 30.0);
        assert_eq!(l.top_sheet_insets().y0, 40.0);
        assert_eq!(l.maximum_detent_value(), 627.0);
    }

    #[test]
    fn pad_adds_bottom_sheet_edge_inset() {
        let l = SheetLayout::new(
            Rect::new(0.0, 0.0, 1024.0, 1366.0),
            Insets::new(0.0, 24.0, 0.0, 20.0),
            TraitSnapshot::PAD,
        );
        assert_eq!(l.bottom_sheet_insets().y0, 34.0);
        assert_eq!(l.top_sheet_insets().y0, 44.0);
        assert_eq!(l.maximum_detent_value(), 1366.0 - 64.0);
    }

    #[test]
    fn landscape_phone_uses_compact_peek() {
        let l = SheetLayout::new(
            Rect::new(0.0, 0.0, 852.0, 393.0),
            Insets::new(59.0, 0.0, 59.0, 21.0),
            TraitSnapshot::PHONE_LANDSCAPE,
        );
        assert_eq!(l.top_sheet_insets().y0, 8.0);
        assert_eq!(l.maximum_detent_value(), 393.0 - 29.0);
    }

    #[test]
    fn custom_table_is_honored() {
        let table = InsetTable {
            phone_regular_peek: 12.0,
            ..InsetTable::PLATFORM
        };
        let l = phone_with_indicator().with_inset_table(table);
        assert_eq!(l.maximum_detent_value(), 747.0);
    }

    #[test]
    fn sheet_height_excludes_bottom_inset() {
        let l = phone_with_indicator().with_sheet_height(500.0);
        assert_eq!(l.sheet_frame_in_window().y0, l.detent_origin_y(500.0));
        assert_eq!(l.sheet_height_in_safe_area(), 500.0);
    }

    #[test]
    fn frame_in_window_applies_transform() {
        let l = phone_with_indicator()
            .with_sheet_frame(Rect::new(0.0, 0.0, 393.0, 400.0))
            .with_sheet_transform(Affine::translate(Vec2::new(0.0, 452.0)));
        assert_eq!(l.sheet_frame_in_window(), Rect::new(0.0, 452.0, 393.0, 852.0));
        assert_eq!(l.sheet_height_in_safe_area(), 366.0);
    }

    #[test]
    fn resolution_context_tracks_geometry() {
        let mut l = phone_with_indicator();
        assert_eq!(l.resolution_context().maximum_detent_value, 749.0);
        l.safe_area.y0 = 47.0;
        assert_eq!(l.resolution_context().maximum_detent_value, 761.0);
    }
}
