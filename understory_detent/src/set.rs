// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered detent sets and their queries.

use crate::{Detent, DetentError, DetentId, ResolutionContext};

/// The detents a sheet is configured with, plus the host's current selection.
///
/// Detents are kept in the order the host supplies them, which is expected to be smallest
/// resolved height first.
#[derive(Clone, Debug, Default)]
pub struct DetentSet {
    detents: Vec<Detent>,
    selected: Option<DetentId>,
}

impl DetentSet {
    /// Create a set with no explicit selection.
    pub fn new(detents: impl IntoIterator<Item = Detent>) -> Self {
        Self {
            detents: detents.into_iter().collect(),
            selected: None,
        }
    }

    /// Builder-style variant of [`DetentSet::set_selected`].
    #[must_use]
    pub fn with_selected(mut self, selected: impl Into<DetentId>) -> Self {
        self.selected = Some(selected.into());
        self
    }

    /// Replace the selected identifier. `None` falls back to the first detent.
    pub fn set_selected(&mut self, selected: Option<DetentId>) {
        self.selected = selected;
    }

    /// The explicitly selected identifier, if any.
    pub fn selected(&self) -> Option<&DetentId> {
        self.selected.as_ref()
    }

    /// All detents in host order, active or not.
    pub fn detents(&self) -> &[Detent] {
        &self.detents
    }

    /// Replace the detents, keeping the selection.
    pub fn set_detents(&mut self, detents: impl IntoIterator<Item = Detent>) {
        self.detents = detents.into_iter().collect();
    }

    /// Number of detents, active or not.
    pub fn len(&self) -> usize {
        self.detents.len()
    }

    /// Returns `true` if the set has no detents.
    pub fn is_empty(&self) -> bool {
        self.detents.is_empty()
    }

    /// Iterate all detents in host order.
    pub fn iter(&self) -> core::slice::Iter<'_, Detent> {
        self.detents.iter()
    }

    /// Look up a detent by identifier.
    pub fn detent(&self, id: &DetentId) -> Option<&Detent> {
        self.detents.iter().find(|d| d.id() == id)
    }

    /// The selected identifier, or the first detent's identifier when nothing is selected.
    pub fn identifier_for_selected(&self) -> Result<&DetentId, DetentError> {
        if let Some(selected) = &self.selected {
            return Ok(selected);
        }
        self.detents
            .first()
            .map(Detent::id)
            .ok_or(DetentError::EmptyDetentSet)
    }

    /// Identifier of the smallest detent.
    ///
    /// With `active` set, inactive detents are skipped; otherwise the first detent in the set
    /// is returned whether or not it resolves.
    pub fn identifier_for_smallest(
        &self,
        active: bool,
        cx: &ResolutionContext,
    ) -> Result<&DetentId, DetentError> {
        if active {
            self.smallest_active(cx).map(Detent::id)
        } else {
            self.detents
                .first()
                .map(Detent::id)
                .ok_or(DetentError::EmptyDetentSet)
        }
    }

    /// First detent in host order that resolves for `cx`.
    pub fn smallest_active(&self, cx: &ResolutionContext) -> Result<&Detent, DetentError> {
        self.ensure_non_empty()?;
        self.detents
            .iter()
            .find(|d| d.is_active(cx))
            .ok_or(DetentError::NoActiveDetent)
    }

    /// Last detent in host order that resolves for `cx`.
    pub fn largest_active(&self, cx: &ResolutionContext) -> Result<&Detent, DetentError> {
        self.ensure_non_empty()?;
        self.detents
            .iter()
            .rev()
            .find(|d| d.is_active(cx))
            .ok_or(DetentError::NoActiveDetent)
    }

    /// Active detents paired with their resolved heights, in host order.
    pub fn active_heights<'a>(
        &'a self,
        cx: &'a ResolutionContext,
    ) -> impl Iterator<Item = (&'a Detent, f64)> + 'a {
        self.detents
            .iter()
            .filter_map(move |d| d.resolved_value(cx).map(|h| (d, h)))
    }

    /// Resolve the height of the detent named `id`.
    pub fn resolve(&self, id: &DetentId, cx: &ResolutionContext) -> Result<f64, DetentError> {
        let detent = self
            .detent(id)
            .ok_or_else(|| DetentError::UnknownDetent(id.clone()))?;
        detent
            .resolved_value(cx)
            .ok_or_else(|| DetentError::UnresolvedDetent(id.clone()))
    }

    fn ensure_non_empty(&self) -> Result<(), DetentError> {
        if self.detents.is_empty() {
            Err(DetentError::EmptyDetentSet)
        } else {
            Ok(())
        }
    }
}

impl<'a> IntoIterator for &'a DetentSet {
    type Item = &'a Detent;
    type IntoIter = core::slice::Iter<'a, Detent>;

    fn into_iter(self) -> Self::IntoIter {
        self.detents.iter()
    }
}
