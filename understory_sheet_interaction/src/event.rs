// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture phases in, interaction events out.

use understory_detent::DetentId;

use crate::{InteractionChange, InteractionEnd};

/// Phase of the platform's drag gesture recognizer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// The drag started.
    Began,
    /// The drag moved.
    Changed,
    /// The finger lifted.
    Ended,
    /// The platform cancelled the gesture.
    Cancelled,
    /// The gesture failed to recognize.
    Failed,
}

impl GesturePhase {
    /// `Ended`, `Cancelled`, or `Failed`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled | Self::Failed)
    }
}

/// Lifecycle notifications a sheet interaction produces.
#[derive(Clone, Debug, PartialEq)]
pub enum InteractionEvent {
    /// A drag began while the sheet rested at `detent`.
    Began {
        /// The selected detent when the drag began.
        detent: DetentId,
    },
    /// The drag moved.
    Changed(InteractionChange),
    /// The drag was released and the sheet is settling.
    WillEnd(InteractionEnd),
    /// The sheet settled at `detent`.
    DidEnd {
        /// The detent the sheet came to rest at.
        detent: DetentId,
    },
    /// The sheet is about to be dismissed.
    WillDismiss,
    /// The sheet was dismissed.
    DidDismiss,
    /// A dismissal was attempted and refused.
    DidAttemptToDismiss,
}

impl InteractionEvent {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Began { .. } => "began",
            Self::Changed(_) => "changed",
            Self::WillEnd(_) => "will_end",
            Self::DidEnd { .. } => "did_end",
            Self::WillDismiss => "will_dismiss",
            Self::DidDismiss => "did_dismiss",
            Self::DidAttemptToDismiss => "did_attempt_to_dismiss",
        }
    }
}

/// Keyboard transitions delivered to the affected sheet only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyboardEvent {
    /// The keyboard is appearing; the sheet was at `from` before being pinned.
    WillShow {
        /// Detent to restore later.
        from: DetentId,
    },
    /// The keyboard is going away; the sheet returns to `to`.
    WillHide {
        /// Detent the sheet returns to.
        to: DetentId,
    },
}
