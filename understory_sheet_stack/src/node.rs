// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use understory_sheet_interaction::SheetInteraction;

use crate::{NavigationForwarding, StackSurface};

/// A modal sheet as the stack sees it.
///
/// A sheet participates in interaction tracking when it carries a [`SheetInteraction`].
/// Non-participating sheets are skipped by the stack walk but still count for levels and
/// hierarchy queries.
#[derive(Default)]
pub struct SheetNode {
    pub(crate) surface: Option<Box<dyn StackSurface>>,
    pub(crate) interaction: Option<SheetInteraction>,
    pub(crate) navigation: Option<NavigationForwarding>,
}

impl fmt::Debug for SheetNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetNode")
            .field("has_surface", &self.surface.is_some())
            .field("interaction", &self.interaction)
            .field("navigation", &self.navigation)
            .finish()
    }
}

impl SheetNode {
    /// A sheet with no surface that does not track interactions.
    pub fn new() -> Self {
        Self::default()
    }

    /// A participating sheet with a default-configured controller.
    pub fn participating(surface: impl StackSurface + 'static) -> Self {
        Self::new()
            .with_surface(surface)
            .with_interaction(SheetInteraction::new())
    }

    /// Attach the sheet's surface.
    #[must_use]
    pub fn with_surface(mut self, surface: impl StackSurface + 'static) -> Self {
        self.surface = Some(Box::new(surface));
        self
    }

    /// Attach an interaction controller, making the sheet participate.
    #[must_use]
    pub fn with_interaction(mut self, interaction: SheetInteraction) -> Self {
        self.interaction = Some(interaction);
        self
    }

    /// Host a navigation stack inside the sheet.
    #[must_use]
    pub fn with_navigation(mut self, navigation: NavigationForwarding) -> Self {
        self.navigation = Some(navigation);
        self
    }

    /// Whether the sheet tracks interactions.
    pub fn is_participating(&self) -> bool {
        self.interaction.is_some()
    }

    /// The sheet's surface.
    pub fn surface(&self) -> Option<&dyn StackSurface> {
        self.surface.as_deref()
    }

    /// The sheet's surface, mutably.
    pub fn surface_mut(&mut self) -> Option<&mut (dyn StackSurface + 'static)> {
        self.surface.as_deref_mut()
    }

    /// The sheet's interaction controller.
    pub fn interaction(&self) -> Option<&SheetInteraction> {
        self.interaction.as_ref()
    }

    /// The sheet's interaction controller, mutably.
    pub fn interaction_mut(&mut self) -> Option<&mut SheetInteraction> {
        self.interaction.as_mut()
    }

    /// The navigation stack hosted in the sheet.
    pub fn navigation(&self) -> Option<&NavigationForwarding> {
        self.navigation.as_ref()
    }

    /// The navigation stack hosted in the sheet, mutably.
    pub fn navigation_mut(&mut self) -> Option<&mut NavigationForwarding> {
        self.navigation.as_mut()
    }
}
