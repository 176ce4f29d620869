// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device-class inset constants.

use understory_detent::{Idiom, SizeClass, TraitSnapshot};

/// Chrome offsets the platform applies to stacked sheets, by device class.
///
/// All values are in points. [`InsetTable::PLATFORM`] holds the values observed on the
/// shipping platform; tests and unusual hosts may substitute their own.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InsetTable {
    /// Peek-through height on a phone with a compact vertical size class (landscape).
    pub phone_compact_peek: f64,
    /// Peek-through height on a phone in any other configuration.
    pub phone_regular_peek: f64,
    /// Peek-through height on a tablet.
    pub pad_peek: f64,
    /// Peek-through height on any other idiom.
    pub other_peek: f64,
    /// Extra top inset for the bottom sheet on devices with a home button
    /// (no bottom safe-area inset).
    pub home_button_top_inset: f64,
    /// Extra top inset for the bottom sheet on tablets with a home indicator.
    pub pad_bottom_sheet_top_inset: f64,
}

impl InsetTable {
    /// The platform's own values.
    pub const PLATFORM: Self = Self {
        phone_compact_peek: 8.0,
        phone_regular_peek: 10.0,
        pad_peek: 20.0,
        other_peek: 10.0,
        home_button_top_inset: 10.0,
        pad_bottom_sheet_top_inset: 10.0,
    };

    /// Vertical space the bottom sheet keeps visible above a full-height top sheet.
    pub fn peek_through(&self, traits: &TraitSnapshot) -> f64 {
        match traits.idiom {
            Idiom::Phone if traits.vertical_size_class == SizeClass::Compact => {
                self.phone_compact_peek
            }
            Idiom::Phone => self.phone_regular_peek,
            Idiom::Pad => self.pad_peek,
            Idiom::Other => self.other_peek,
        }
    }
}

impl Default for InsetTable {
    fn default() -> Self {
        Self::PLATFORM
    }
}
