// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution context and the container trait snapshot it carries.

/// Broad device class of the container presenting a sheet.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Idiom {
    /// Handset-sized container.
    #[default]
    Phone,
    /// Tablet-sized container.
    Pad,
    /// Anything else (desktop, TV, unspecified).
    Other,
}

/// Horizontal or vertical size class of a container.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum SizeClass {
    /// The platform did not report a size class.
    #[default]
    Unspecified,
    /// Constrained space (for example a phone in landscape, vertically).
    Compact,
    /// Unconstrained space.
    Regular,
}

/// Immutable snapshot of the container traits a detent resolver may consult.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct TraitSnapshot {
    /// Device class.
    pub idiom: Idiom,
    /// Horizontal size class.
    pub horizontal_size_class: SizeClass,
    /// Vertical size class.
    pub vertical_size_class: SizeClass,
}

impl TraitSnapshot {
    /// A phone in portrait orientation.
    pub const PHONE_PORTRAIT: Self = Self {
        idiom: Idiom::Phone,
        horizontal_size_class: SizeClass::Compact,
        vertical_size_class: SizeClass::Regular,
    };

    /// A phone in landscape orientation.
    pub const PHONE_LANDSCAPE: Self = Self {
        idiom: Idiom::Phone,
        horizontal_size_class: SizeClass::Compact,
        vertical_size_class: SizeClass::Compact,
    };

    /// A tablet at full width.
    pub const PAD: Self = Self {
        idiom: Idiom::Pad,
        horizontal_size_class: SizeClass::Regular,
        vertical_size_class: SizeClass::Regular,
    };
}

/// Inputs a detent resolver needs to compute a height.
///
/// Construct one per query. `maximum_detent_value` is the height available to the top
/// sheet of a stack inside the window's safe area, as computed by the layout provider.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolutionContext {
    /// Container traits at the time of the query.
    pub container_traits: TraitSnapshot,
    /// Height ceiling a detent may reference (for example `0.5 * maximum_detent_value`).
    pub maximum_detent_value: f64,
}

impl ResolutionContext {
    /// Create a context from a trait snapshot and the current maximum detent value.
    pub const fn new(container_traits: TraitSnapshot, maximum_detent_value: f64) -> Self {
        Self {
            container_traits,
            maximum_detent_value,
        }
    }
}
