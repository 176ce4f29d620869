// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stock detents.
//!
//! `small` is a fixed height tall enough to show a grabber and a title row.
//! The others are fractions of the context's maximum detent value.
//! [`keyboard`] is the transient detent a sheet is pinned to while the on-screen keyboard
//! is visible.

use crate::{Detent, DetentId};

/// Identifier of [`small`].
pub const SMALL: DetentId = DetentId::from_static("small");
/// Identifier of [`med_small`].
pub const MED_SMALL: DetentId = DetentId::from_static("medSmall");
/// Identifier of [`medium`].
pub const MEDIUM: DetentId = DetentId::from_static("medium");
/// Identifier of [`med_large`].
pub const MED_LARGE: DetentId = DetentId::from_static("medLarge");
/// Identifier of [`large`].
pub const LARGE: DetentId = DetentId::from_static("large");
/// Identifier of [`full`].
pub const FULL: DetentId = DetentId::from_static("full");
/// Identifier of [`keyboard`].
pub const KEYBOARD: DetentId = DetentId::from_static("keyboard");

/// Height of [`small`] in points.
pub const SMALL_HEIGHT: f64 = 56.0;

/// Fixed 56pt detent.
pub fn small() -> Detent {
    Detent::fixed(SMALL, SMALL_HEIGHT)
}

/// A third of the maximum height.
pub fn med_small() -> Detent {
    Detent::fraction(MED_SMALL, 0.33)
}

/// Half the maximum height.
pub fn medium() -> Detent {
    Detent::fraction(MEDIUM, 0.5)
}

/// Two thirds of the maximum height.
pub fn med_large() -> Detent {
    Detent::fraction(MED_LARGE, 0.67)
}

/// Nearly full height, leaving the sheet below visible.
pub fn large() -> Detent {
    Detent::fraction(LARGE, 0.95)
}

/// The maximum height.
pub fn full() -> Detent {
    Detent::fraction(FULL, 1.0)
}

/// The maximum height, used while the keyboard is on screen.
pub fn keyboard() -> Detent {
    Detent::fraction(KEYBOARD, 1.0)
}
