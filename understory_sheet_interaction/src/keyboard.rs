// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard coexistence.
//!
//! While the on-screen keyboard is visible the platform pins a sheet to its largest detent.
//! This is a binary state, not a drag: no mapping or percentages are computed.

use understory_detent::{DetentError, DetentId, DetentSet, ResolutionContext};

use crate::KeyboardEvent;

/// Tracks whether a sheet is pinned by the keyboard.
#[derive(Clone, Debug, Default)]
pub struct KeyboardObserver {
    pinned_from: Option<DetentId>,
}

impl KeyboardObserver {
    /// Create an observer with the keyboard hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// The keyboard is about to appear.
    ///
    /// Returns `None` if the sheet is already pinned.
    pub fn will_show(&mut self, detents: &DetentSet) -> Result<Option<KeyboardEvent>, DetentError> {
        if self.pinned_from.is_some() {
            return Ok(None);
        }
        let from = detents.identifier_for_selected()?.clone();
        self.pinned_from = Some(from.clone());
        Ok(Some(KeyboardEvent::WillShow { from }))
    }

    /// The keyboard is about to disappear.
    ///
    /// The sheet returns to whatever is selected now, which includes selection changes made
    /// while the keyboard was up. Returns `None` if the sheet was not pinned.
    pub fn will_hide(&mut self, detents: &DetentSet) -> Result<Option<KeyboardEvent>, DetentError> {
        if self.pinned_from.is_none() {
            return Ok(None);
        }
        let to = detents.identifier_for_selected()?.clone();
        self.pinned_from = None;
        Ok(Some(KeyboardEvent::WillHide { to }))
    }

    /// Whether the keyboard currently pins the sheet.
    pub fn is_pinned(&self) -> bool {
        self.pinned_from.is_some()
    }

    /// The detent selected when the keyboard appeared.
    pub fn pinned_from(&self) -> Option<&DetentId> {
        self.pinned_from.as_ref()
    }

    /// The detent the sheet is pinned to while the keyboard is up: the largest active one.
    pub fn pinned_detent<'a>(
        &self,
        detents: &'a DetentSet,
        cx: &ResolutionContext,
    ) -> Result<Option<&'a DetentId>, DetentError> {
        if !self.is_pinned() {
            return Ok(None);
        }
        Ok(Some(detents.largest_active(cx)?.id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_detent::{TraitSnapshot, presets};

    fn set() -> DetentSet {
        DetentSet::new([presets::small(), presets::medium(), presets::large()])
            .with_selected(presets::MEDIUM)
    }

    #[test]
    fn show_then_hide_reports_selection() {
        let mut kb = KeyboardObserver::new();
        let mut detents = set();
        assert_eq!(
            kb.will_show(&detents),
            Ok(Some(KeyboardEvent::WillShow {
                from: presets::MEDIUM
            }))
        );
        assert!(kb.is_pinned());
        detents.set_selected(Some(presets::SMALL));
        assert_eq!(
            kb.will_hide(&detents),
            Ok(Some(KeyboardEvent::WillHide {
                to: presets::SMALL
            }))
        );
        assert!(!kb.is_pinned());
    }

    #[test]
    fn repeated_transitions_are_ignored() {
        let mut kb = KeyboardObserver::new();
        let detents = set();
        assert_eq!(kb.will_hide(&detents), Ok(None));
        assert!(kb.will_show(&detents).unwrap().is_some());
        assert_eq!(kb.will_show(&detents), Ok(None));
        assert_eq!(kb.pinned_from(), Some(&presets::MEDIUM));
    }

    #[test]
    fn pinned_detent_is_largest_active() {
        let mut kb = KeyboardObserver::new();
        let detents = set();
        let cx = ResolutionContext::new(TraitSnapshot::PHONE_PORTRAIT, 749.0);
        assert_eq!(kb.pinned_detent(&detents, &cx), Ok(None));
        kb.will_show(&detents).unwrap();
        assert_eq!(kb.pinned_detent(&detents, &cx), Ok(Some(&presets::LARGE)));
    }
}
