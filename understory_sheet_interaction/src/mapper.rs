// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture-to-detent mapping.
//!
//! ## Overview
//!
//! [`map_sample`] turns one drag sample (the sheet's current frame plus the drag direction)
//! into an [`InteractionChange`].
//!
//! - Every active detent gets a signed distance `sheet height - detent height`.
//!   Non-positive distances are *above* the sheet, positive ones *below*.
//! - `closest` minimizes the absolute distance. Ties go to the earlier detent.
//! - Moving up, `approaching` is the nearest detent above and `preceding` the nearest below.
//!   Moving down it is the other way around.
//! - When no detent exists in the direction of travel both picks fall back to the extreme
//!   detent, making them equal. That is overscroll, and progress is
//!   [`Progress::Overscrolling`].
//!
//! ## Total percentage
//!
//! [`percentage_total`] works from the sheet's top edge in window space rather than its height,
//! so the extremes map exactly to `0` and `1` even when safe-area insets are present.

use kurbo::Rect;
use smallvec::SmallVec;
use understory_detent::{DetentError, DetentId, DetentSet};
use understory_sheet_layout::SheetLayout;

use crate::{
    DetentInfo, Directions, InteractionChange, InteractionError, PercentageMode, Progress,
};

#[derive(Clone, Debug)]
struct DetentLayout<'a> {
    id: &'a DetentId,
    height: f64,
    distance: f64,
}

impl DetentLayout<'_> {
    fn abs_distance(&self) -> f64 {
        self.distance.abs()
    }

    fn info(&self) -> DetentInfo {
        DetentInfo {
            detent: self.id.clone(),
            distance: self.abs_distance(),
        }
    }
}

/// Map one drag sample onto the sheet's detents.
///
/// `layout` must describe the sheet's current frame. Fails with
/// [`InteractionError::StationarySample`] when `directions` has no vertical component, and
/// with a [`DetentError`] when the set has no active detent.
///
/// ```
/// use kurbo::{Insets, Rect};
/// use understory_detent::{presets, DetentSet, TraitSnapshot};
/// use understory_sheet_interaction::{map_sample, Directions, PercentageMode};
/// use understory_sheet_layout::SheetLayout;
///
/// let detents = DetentSet::new([presets::small(), presets::medium(), presets::large()]);
/// let layout = SheetLayout::new(
///     Rect::new(0.0, 0.0, 393.0, 852.0),
///     Insets::new(0.0, 59.0, 0.0, 34.0),
///     TraitSnapshot::PHONE_PORTRAIT,
/// )
/// .with_sheet_height(500.0);
///
/// let change = map_sample(&detents, &layout, Directions::UP, PercentageMode::ActiveDetents)?;
/// assert_eq!(change.approaching.detent, presets::LARGE);
/// assert_eq!(change.preceding.detent, presets::MEDIUM);
/// assert!((change.percentage_approaching.value() - 0.3723).abs() < 1e-3);
/// # Ok::<(), understory_sheet_interaction::InteractionError>(())
/// ```
pub fn map_sample(
    detents: &DetentSet,
    layout: &SheetLayout,
    directions: Directions,
    mode: PercentageMode,
) -> Result<InteractionChange, InteractionError> {
    if !directions.has_vertical_component() {
        return Err(InteractionError::StationarySample);
    }
    let cx = layout.resolution_context();
    let frame = layout.sheet_frame_in_window();
    let sheet_height = layout.sheet_height_in_safe_area();

    let infos: SmallVec<[DetentLayout<'_>; 8]> = detents
        .active_heights(&cx)
        .map(|(d, height)| DetentLayout {
            id: d.id(),
            height,
            distance: sheet_height - height,
        })
        .collect();
    let (Some(first), Some(last)) = (infos.first(), infos.last()) else {
        let err = if detents.is_empty() {
            DetentError::EmptyDetentSet
        } else {
            DetentError::NoActiveDetent
        };
        return Err(err.into());
    };

    let mut closest = first;
    for info in &infos[1..] {
        if info.abs_distance() < closest.abs_distance() {
            closest = info;
        }
    }

    let nearest_above = infos.iter().find(|i| i.distance <= 0.0);
    let nearest_below = infos.iter().rev().find(|i| i.distance > 0.0);
    let moving_up = directions.contains(Directions::UP);
    let (approaching, preceding) = if moving_up {
        (nearest_above.unwrap_or(last), nearest_below.unwrap_or(first))
    } else {
        (nearest_below.unwrap_or(first), nearest_above.unwrap_or(last))
    };

    let is_overscrolling = preceding.id == approaching.id;
    let percentage_approaching = if is_overscrolling {
        tracing::trace!(detent = %approaching.id, "overscrolling");
        Progress::Overscrolling
    } else {
        let span = (preceding.height - approaching.height).abs();
        if span > 0.0 {
            Progress::Normal(1.0 - approaching.abs_distance() / span)
        } else {
            // Distinct detents at the same height: the sheet is already there.
            Progress::Normal(1.0)
        }
    };

    let percentage_total = percentage_total(detents, layout, frame, mode)?;

    Ok(InteractionChange {
        is_minimizing: directions.contains(Directions::DOWN),
        is_overscrolling,
        closest: closest.info(),
        approaching: approaching.info(),
        preceding: preceding.info(),
        percentage_total,
        percentage_approaching,
        percentage_preceding: percentage_approaching.complement(),
    })
}

/// Position of a sheet whose window-space frame is `frame`, normalized per `mode`.
///
/// `0` is the smallest active detent. Values below `0` or above `1` mean the sheet is
/// overscrolled past an end. A degenerate span (a single active detent) reports `1`.
pub fn percentage_total(
    detents: &DetentSet,
    layout: &SheetLayout,
    frame: Rect,
    mode: PercentageMode,
) -> Result<f64, DetentError> {
    let cx = layout.resolution_context();
    let smallest = detents.smallest_active(&cx)?;
    let smallest = smallest
        .resolved_value(&cx)
        .ok_or_else(|| DetentError::UnresolvedDetent(smallest.id().clone()))?;
    let largest = detents.largest_active(&cx)?;
    let largest = largest
        .resolved_value(&cx)
        .ok_or_else(|| DetentError::UnresolvedDetent(largest.id().clone()))?;

    let top_inset = layout.top_sheet_insets().y0;
    let max = cx.maximum_detent_value;
    let (y, ceiling) = match mode {
        PercentageMode::ActiveDetents => (frame.y0 - (max - largest) - top_inset, largest),
        PercentageMode::SafeArea => (frame.y0 - top_inset, max),
    };
    let span = ceiling - smallest;
    if span <= 0.0 {
        return Ok(1.0);
    }
    Ok(1.0 - y / span)
}

/// Progress to drive an animation scoped to `detent`.
///
/// Returns the preceding progress when `detent` is being approached from above, the
/// approaching progress when the sheet is leaving `detent` upward, and `None` otherwise.
/// The value grows toward `1` as the sheet moves up.
pub fn animating(
    detent: &DetentId,
    change: &InteractionChange,
    directions: Directions,
) -> Option<f64> {
    if &change.approaching.detent == detent && directions.contains(Directions::DOWN) {
        Some(change.percentage_preceding.value())
    } else if &change.preceding.detent == detent && directions.contains(Directions::UP) {
        Some(change.percentage_approaching.value())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Insets;
    use understory_detent::{Detent, TraitSnapshot, presets};

    fn phone() -> SheetLayout {
        SheetLayout::new(
            Rect::new(0.0, 0.0, 393.0, 852.0),
            Insets::new(0.0, 59.0, 0.0, 34.0),
            TraitSnapshot::PHONE_PORTRAIT,
        )
    }

    fn three() -> DetentSet {
        DetentSet::new([presets::small(), presets::medium(), presets::large()])
    }

    fn map(height: f64, dir: Directions) -> InteractionChange {
        map_sample(
            &three(),
            &phone().with_sheet_height(height),
            dir,
            PercentageMode::ActiveDetents,
        )
        .unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn dragging_up_from_medium() {
        let c = map(500.0, Directions::UP | Directions::LEFT);
        assert_eq!(c.approaching.detent, presets::LARGE);
        assert!(close(c.approaching.distance, 211.55));
        assert_eq!(c.preceding.detent, presets::MEDIUM);
        assert!(close(c.preceding.distance, 125.5));
        assert_eq!(c.closest.detent, presets::MEDIUM);
        assert!(!c.is_minimizing);
        assert!(!c.is_overscrolling);
        let expected = 1.0 - 211.55 / (711.55 - 374.5);
        assert!(close(c.percentage_approaching.value(), expected));
        assert!(close(
            c.percentage_approaching.value() + c.percentage_preceding.value(),
            1.0
        ));
    }

    #[test]
    fn dragging_down_swaps_roles() {
        let c = map(500.0, Directions::DOWN);
        assert_eq!(c.approaching.detent, presets::MEDIUM);
        assert_eq!(c.preceding.detent, presets::LARGE);
        assert!(c.is_minimizing);
        let expected = 1.0 - 125.5 / (711.55 - 374.5);
        assert!(close(c.percentage_approaching.value(), expected));
    }

    #[test]
    fn resting_on_a_detent_counts_as_above() {
        let c = map(374.5, Directions::UP);
        assert_eq!(c.closest.detent, presets::MEDIUM);
        assert!(close(c.closest.distance, 0.0));
        assert_eq!(c.approaching.detent, presets::MEDIUM);
        assert_eq!(c.preceding.detent, presets::SMALL);
        assert!(close(c.percentage_approaching.value(), 1.0));
    }

    #[test]
    fn overscroll_past_largest() {
        let c = map(730.0, Directions::UP);
        assert_eq!(c.approaching.detent, presets::LARGE);
        assert_eq!(c.preceding.detent, presets::LARGE);
        assert!(c.is_overscrolling);
        assert_eq!(c.percentage_approaching, Progress::Overscrolling);
        assert_eq!(c.percentage_preceding.value(), -1.0);
        assert!(c.percentage_total > 1.0);
    }

    #[test]
    fn overscroll_below_smallest() {
        let c = map(40.0, Directions::DOWN);
        assert_eq!(c.approaching.detent, presets::SMALL);
        assert!(c.is_overscrolling);
        assert!(c.percentage_total < 0.0);
        assert!(c.percentage_approaching.value().is_finite());
    }

    #[test]
    fn closest_ties_go_to_first() {
        let detents = DetentSet::new([Detent::fixed("a", 100.0), Detent::fixed("b", 200.0)]);
        let c = map_sample(
            &detents,
            &phone().with_sheet_height(150.0),
            Directions::UP,
            PercentageMode::ActiveDetents,
        )
        .unwrap();
        assert_eq!(c.closest.detent.as_str(), "a");
    }

    #[test]
    fn inactive_detents_are_ignored() {
        let detents = DetentSet::new([
            presets::small(),
            Detent::custom("hidden", |_| None),
            presets::large(),
        ]);
        let c = map_sample(
            &detents,
            &phone().with_sheet_height(300.0),
            Directions::UP,
            PercentageMode::ActiveDetents,
        )
        .unwrap();
        assert_eq!(c.approaching.detent, presets::LARGE);
        assert_eq!(c.preceding.detent, presets::SMALL);
    }

    #[test]
    fn stationary_and_empty_are_errors() {
        let layout = phone().with_sheet_height(300.0);
        assert_eq!(
            map_sample(&three(), &layout, Directions::STATIONARY, PercentageMode::default()),
            Err(InteractionError::StationarySample)
        );
        assert_eq!(
            map_sample(&DetentSet::default(), &layout, Directions::UP, PercentageMode::default()),
            Err(InteractionError::Detent(DetentError::EmptyDetentSet))
        );
        let dark = DetentSet::new([Detent::custom("x", |_| None)]);
        assert_eq!(
            map_sample(&dark, &layout, Directions::UP, PercentageMode::default()),
            Err(InteractionError::Detent(DetentError::NoActiveDetent))
        );
    }

    #[test]
    fn percentage_total_hits_bounds_exactly() {
        let layout = phone();
        let at = |h: f64, mode| {
            let frame = layout.with_sheet_height(h).sheet_frame_in_window();
            percentage_total(&three(), &layout, frame, mode).unwrap()
        };
        assert!(close(at(56.0, PercentageMode::ActiveDetents), 0.0));
        assert!(close(at(711.55, PercentageMode::ActiveDetents), 1.0));
        assert!(close(at(56.0, PercentageMode::SafeArea), 0.0));
        assert!(close(at(749.0, PercentageMode::SafeArea), 1.0));
        assert!(at(711.55, PercentageMode::SafeArea) < 1.0);
    }

    #[test]
    fn percentage_total_single_detent_is_one() {
        let detents = DetentSet::new([presets::large()]);
        let layout = phone();
        let frame = layout.with_sheet_height(300.0).sheet_frame_in_window();
        assert_eq!(
            percentage_total(&detents, &layout, frame, PercentageMode::ActiveDetents),
            Ok(1.0)
        );
    }

    #[test]
    fn animating_picks_progress_by_direction() {
        let up = map(500.0, Directions::UP);
        assert_eq!(
            animating(&presets::MEDIUM, &up, Directions::UP),
            Some(up.percentage_approaching.value())
        );
        assert_eq!(animating(&presets::LARGE, &up, Directions::UP), None);

        let down = map(500.0, Directions::DOWN);
        assert_eq!(
            animating(&presets::MEDIUM, &down, Directions::DOWN),
            Some(down.percentage_preceding.value())
        );
        assert_eq!(animating(&presets::SMALL, &down, Directions::DOWN), None);
    }
}
