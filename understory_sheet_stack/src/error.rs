// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

use crate::SheetId;

/// Misuse of a [`SheetStack`](crate::SheetStack).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StackError {
    /// The id refers to a dismissed sheet or was never issued by this stack.
    #[error("sheet {0:?} is not alive")]
    Stale(SheetId),
    /// The id names a root presenter where a modal sheet is required.
    #[error("{0:?} is a root presenter, not a sheet")]
    NotASheet(SheetId),
    /// The presenter already has a sheet presented over it.
    #[error("{0:?} is already presenting a sheet")]
    AlreadyPresenting(SheetId),
    /// The sheet has no interaction controller.
    #[error("sheet {0:?} does not track interactions")]
    NotParticipating(SheetId),
}
