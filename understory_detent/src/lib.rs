// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_detent --heading-base-level=0

//! Understory Detent: named resting heights for modal sheets.
//!
//! ## Overview
//!
//! A [`Detent`] pairs a stable [`DetentId`] with a resolver that turns a
//! [`ResolutionContext`] into an optional height.
//! A detent whose resolver returns `None` is *inactive* for that context and never
//! takes part in geometry calculations.
//!
//! A [`DetentSet`] is the ordered list of detents a sheet is configured with,
//! smallest resolved height first, plus the host's currently selected identifier.
//! Ordering is the host's responsibility; this crate only scans it.
//!
//! ## Contexts are never cached
//!
//! Build a fresh [`ResolutionContext`] for each query.
//! The maximum detent value depends on window geometry and safe-area insets, both of which
//! change during rotation or while the on-screen keyboard is animating.
//!
//! ## Minimal example
//!
//! ```
//! use understory_detent::{presets, DetentSet, ResolutionContext, TraitSnapshot};
//!
//! let set = DetentSet::new([presets::small(), presets::medium(), presets::large()]);
//! let cx = ResolutionContext::new(TraitSnapshot::default(), 749.0);
//!
//! let medium = set.detent(&presets::MEDIUM).unwrap();
//! assert_eq!(medium.resolved_value(&cx), Some(374.5));
//!
//! assert_eq!(set.smallest_active(&cx).unwrap().id(), &presets::SMALL);
//! assert_eq!(set.largest_active(&cx).unwrap().id(), &presets::LARGE);
//!
//! // With no explicit selection the first detent is reported as selected.
//! assert_eq!(set.identifier_for_selected().unwrap(), &presets::SMALL);
//! ```
//!
//! ## Comparison policy
//!
//! [`Detent::greater_than`] treats unresolved detents as the smallest possible value:
//! an unresolved receiver is never greater, and a resolved receiver is always greater than
//! an unresolved argument.
//!
//! ## Errors
//!
//! Queries that rely on host invariants (a non-empty set, at least one active detent)
//! return [`DetentError`] instead of panicking. Callers decide whether a violation is
//! fatal.

mod context;
mod detent;
mod error;
pub mod presets;
mod set;

pub use context::{Idiom, ResolutionContext, SizeClass, TraitSnapshot};
pub use detent::{Detent, DetentId, ResolverFn};
pub use error::DetentError;
pub use set::DetentSet;
