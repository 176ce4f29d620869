// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Records emitted while a sheet is dragged and when the drag is released.

use understory_detent::DetentId;

/// A detent paired with the sheet's distance to it.
#[derive(Clone, Debug, PartialEq)]
pub struct DetentInfo {
    /// The detent.
    pub detent: DetentId,
    /// Absolute distance in points from the sheet's top edge to the detent.
    pub distance: f64,
}

/// Progress between the preceding and approaching detents.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Progress {
    /// Fractional progress. `1.0` means the approaching detent has been reached.
    Normal(f64),
    /// There is no detent left in the direction of travel, so no interval exists.
    Overscrolling,
}

impl Progress {
    /// Scalar value, with `-1.0` standing in for [`Progress::Overscrolling`].
    pub fn value(self) -> f64 {
        match self {
            Self::Normal(p) => p,
            Self::Overscrolling => -1.0,
        }
    }

    /// `1 - p` for normal progress. Overscrolling stays overscrolling.
    #[must_use]
    pub fn complement(self) -> Self {
        match self {
            Self::Normal(p) => Self::Normal(1.0 - p),
            Self::Overscrolling => Self::Overscrolling,
        }
    }

    /// Returns `true` for [`Progress::Overscrolling`].
    pub fn is_overscrolling(self) -> bool {
        matches!(self, Self::Overscrolling)
    }
}

/// Snapshot computed for one drag sample.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionChange {
    /// The drag has a downward component.
    pub is_minimizing: bool,
    /// The sheet is past the last detent in its direction of travel (rubber-banding).
    pub is_overscrolling: bool,
    /// The detent nearest the sheet's top edge, regardless of direction.
    pub closest: DetentInfo,
    /// The detent the sheet is moving toward.
    pub approaching: DetentInfo,
    /// The detent the sheet is moving away from.
    pub preceding: DetentInfo,
    /// Position within the span of active detents: `0` at the smallest, `1` at the largest.
    /// Values outside `0..=1` indicate overscroll past an end.
    pub percentage_total: f64,
    /// Progress from `preceding` toward `approaching`.
    pub percentage_approaching: Progress,
    /// Complement of `percentage_approaching`.
    pub percentage_preceding: Progress,
}

/// Record emitted once when a drag is released.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionEnd {
    /// The detent the sheet is settling at, and the distance to it from the last pre-release
    /// sheet height.
    pub target: DetentInfo,
    /// Total percentage of the settled position.
    pub target_percentage_total: f64,
    /// Total percentage at the moment of release.
    pub on_touch_up_percentage_total: f64,
}
