// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;
use understory_detent::DetentError;

/// Invariant violations detected while tracking an interaction.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InteractionError {
    /// The host's detent set broke one of its guarantees.
    #[error(transparent)]
    Detent(#[from] DetentError),
    /// A drag sample with zero velocity reached the mapper.
    #[error("stationary drag sample reached the detent mapper")]
    StationarySample,
}
