// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sheet_layout --heading-base-level=0

//! Understory Sheet Layout: geometry for modal sheet stacks.
//!
//! A [`SheetLayout`] is a per-frame snapshot of a window, its safe-area insets, and the frame
//! of a sheet's root view. From it the crate derives the insets of the top and bottom sheets in
//! a stack and the *maximum detent value*, the height ceiling every detent resolver sees.
//!
//! ## Top and bottom sheets
//!
//! When one sheet is presented over another, the sheet underneath stays visible as a thin
//! strip above the top sheet. The height of that strip ("peek-through") and an extra top inset
//! on home-button devices depend on the device class. Those constants live in an
//! [`InsetTable`]; [`InsetTable::PLATFORM`] carries the platform's values.
//!
//! The bottom inset of both sheets is the window's bottom safe-area inset.
//!
//! ## No caching
//!
//! Geometry changes during a drag, on rotation, and while the keyboard animates.
//! Build a new [`SheetLayout`] (or mutate its fields) every frame; every query recomputes.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Insets, Rect};
//! use understory_detent::TraitSnapshot;
//! use understory_sheet_layout::SheetLayout;
//!
//! // A phone with a home indicator.
//! let layout = SheetLayout::new(
//!     Rect::new(0.0, 0.0, 393.0, 852.0),
//!     Insets::new(0.0, 59.0, 0.0, 34.0),
//!     TraitSnapshot::PHONE_PORTRAIT,
//! )
//! .with_sheet_height(374.5);
//!
//! assert_eq!(layout.maximum_detent_value(), 749.0);
//! assert_eq!(layout.sheet_height_in_safe_area(), 374.5);
//! assert_eq!(layout.resolution_context().maximum_detent_value, 749.0);
//! ```

mod layout;
mod table;

pub use layout::SheetLayout;
pub use table::InsetTable;
