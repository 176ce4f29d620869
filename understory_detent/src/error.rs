// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

use crate::DetentId;

/// Host invariant violations surfaced by detent queries.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DetentError {
    /// The detent set has no members.
    #[error("detent set is empty")]
    EmptyDetentSet,
    /// No detent in the set resolves for the current context.
    #[error("detent set has no active detent for the current context")]
    NoActiveDetent,
    /// The identifier does not name a detent in the set.
    #[error("no detent with identifier `{0}`")]
    UnknownDetent(DetentId),
    /// The detent exists but is inactive for the current context.
    #[error("detent `{0}` does not resolve for the current context")]
    UnresolvedDetent(DetentId),
}
