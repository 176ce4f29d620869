// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.

/// What the controller does when a host invariant is violated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvariantPolicy {
    /// Panic with the error. Surfaces integration bugs during development.
    Panic,
    /// Log the error and substitute a fallback (skip the event, or report `0`).
    Recover,
}

impl Default for InvariantPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Panic
        } else {
            Self::Recover
        }
    }
}

/// How [`percentage_total`](crate::percentage_total) normalizes a sheet's position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PercentageMode {
    /// `0` at the smallest active detent, `1` at the largest.
    #[default]
    ActiveDetents,
    /// `0` at the smallest active detent, `1` at the top of the safe area.
    ///
    /// `1` is only reachable if some detent resolves to the maximum detent value.
    SafeArea,
}

/// Settings for a [`SheetInteraction`](crate::SheetInteraction).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionConfig {
    /// Handling of host invariant violations.
    pub invariant_policy: InvariantPolicy,
    /// Default normalization for
    /// [`SheetInteraction::total_percentage_animated`](crate::SheetInteraction::total_percentage_animated).
    pub percentage_mode: PercentageMode,
    /// Attached to every log record the controller emits.
    pub debug_label: String,
}

impl InteractionConfig {
    /// Builder-style setter for [`InteractionConfig::debug_label`].
    #[must_use]
    pub fn with_debug_label(mut self, label: impl Into<String>) -> Self {
        self.debug_label = label.into();
        self
    }

    /// Builder-style setter for [`InteractionConfig::invariant_policy`].
    #[must_use]
    pub fn with_invariant_policy(mut self, policy: InvariantPolicy) -> Self {
        self.invariant_policy = policy;
        self
    }
}
