// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag direction classification.

use core::fmt;

use kurbo::Vec2;

bitflags::bitflags! {
    /// Directions of a drag sample, derived from its velocity.
    ///
    /// A moving sample carries at most one vertical and at most one horizontal bit; an axis
    /// with zero velocity contributes nothing.
    /// A sample with zero velocity is [`Directions::STATIONARY`] and carries nothing else.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Directions: u8 {
        /// No movement.
        const STATIONARY = 1 << 0;
        /// Toward the top of the window (negative Y).
        const UP         = 1 << 1;
        /// Toward the bottom of the window.
        const DOWN       = 1 << 2;
        /// Toward the left edge (negative X).
        const LEFT       = 1 << 3;
        /// Toward the right edge.
        const RIGHT      = 1 << 4;
    }
}

impl Directions {
    /// Classify a velocity in window coordinates.
    ///
    /// ```
    /// use kurbo::Vec2;
    /// use understory_sheet_interaction::Directions;
    ///
    /// assert_eq!(Directions::from_velocity(Vec2::ZERO), Directions::STATIONARY);
    /// assert_eq!(
    ///     Directions::from_velocity(Vec2::new(-20.0, -300.0)),
    ///     Directions::UP | Directions::LEFT,
    /// );
    /// assert!(!Directions::from_velocity(Vec2::new(250.0, 0.0)).has_vertical_component());
    /// ```
    pub fn from_velocity(velocity: Vec2) -> Self {
        if velocity.x == 0.0 && velocity.y == 0.0 {
            return Self::STATIONARY;
        }
        let mut out = Self::empty();
        if velocity.y > 0.0 {
            out |= Self::DOWN;
        } else if velocity.y < 0.0 {
            out |= Self::UP;
        }
        if velocity.x > 0.0 {
            out |= Self::RIGHT;
        } else if velocity.x < 0.0 {
            out |= Self::LEFT;
        }
        out
    }

    /// Whether the sample moves up or down.
    pub fn has_vertical_component(self) -> bool {
        self.intersects(Self::UP | Self::DOWN)
    }

    /// Whether the sample moves left or right.
    pub fn has_horizontal_component(self) -> bool {
        self.intersects(Self::LEFT | Self::RIGHT)
    }

    /// Whether the sample is stationary.
    pub fn is_stationary(self) -> bool {
        self.contains(Self::STATIONARY)
    }
}

impl fmt::Display for Directions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_stationary() {
            return f.write_str("stationary");
        }
        let mut first = true;
        for (name, flag) in [
            ("up", Self::UP),
            ("down", Self::DOWN),
            ("left", Self::LEFT),
            ("right", Self::RIGHT),
        ] {
            if self.contains(flag) {
                if !first {
                    f.write_str(", ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
