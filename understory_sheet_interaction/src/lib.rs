// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sheet_interaction --heading-base-level=0

//! Understory Sheet Interaction: track drags on a modal sheet in terms of its detents.
//!
//! ## Overview
//!
//! A modal sheet snaps between a handful of detents, but the user drags it continuously.
//! This crate maps each drag sample onto the detents:
//! which one is closest, which one the sheet is approaching, which one it is leaving,
//! and how far along it is.
//!
//! - [`map_sample`] is the pure mapping step. It produces an [`InteractionChange`].
//! - [`percentage_total`] normalizes a sheet frame against the span of active detents
//!   ([`PercentageMode::ActiveDetents`]) or the safe area ([`PercentageMode::SafeArea`]).
//! - [`SheetInteraction`] wraps the mapper in a gesture lifecycle and emits
//!   [`InteractionEvent`]s: `Began`, `Changed`, `WillEnd`, `DidEnd`.
//! - [`KeyboardObserver`] tracks whether the on-screen keyboard pins the sheet.
//!
//! ## Hosts and deferral
//!
//! The controller reads geometry and detents through the [`SheetHost`] trait on every call.
//! Gesture end is not processed immediately: the platform's selected detent and layout
//! settle one frame later, so terminal phases queue work that the host drains with
//! [`SheetInteraction::run_deferred`] after its next layout pass.
//! A new drag may start before that happens; the sessions do not interfere beyond the
//! deferred work reading slightly newer geometry.
//!
//! ## Invariants
//!
//! A detent set with no active detent, or a target detent that does not resolve, is a host
//! bug. [`InvariantPolicy::Panic`] (the default with debug assertions) panics;
//! [`InvariantPolicy::Recover`] logs the error with `tracing` and skips the event.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Insets, Rect, Vec2};
//! use understory_detent::{presets, DetentSet, TraitSnapshot};
//! use understory_sheet_interaction::{
//!     GesturePhase, InteractionEvent, SheetInteraction, SheetSnapshot,
//! };
//! use understory_sheet_layout::SheetLayout;
//!
//! let layout = SheetLayout::new(
//!     Rect::new(0.0, 0.0, 393.0, 852.0),
//!     Insets::new(0.0, 59.0, 0.0, 34.0),
//!     TraitSnapshot::PHONE_PORTRAIT,
//! );
//! let detents = DetentSet::new([presets::small(), presets::medium(), presets::large()])
//!     .with_selected(presets::MEDIUM);
//! let mut host = SheetSnapshot::new(layout.with_sheet_height(374.5), detents);
//! let mut sheet = SheetInteraction::new();
//!
//! let up = Vec2::new(0.0, -500.0);
//! sheet.handle_pan(&host, GesturePhase::Began, up);
//!
//! host.layout = layout.with_sheet_height(500.0);
//! let Some(InteractionEvent::Changed(change)) = sheet.handle_pan(&host, GesturePhase::Changed, up)
//! else {
//!     unreachable!();
//! };
//! assert_eq!(change.approaching.detent, presets::LARGE);
//!
//! // Release. The platform animates to `large` and updates its selection.
//! sheet.handle_pan(&host, GesturePhase::Ended, up);
//! host.detents.set_selected(Some(presets::LARGE));
//! sheet.selected_detent_changed();
//!
//! let events = sheet.run_deferred(&host);
//! assert!(matches!(events[0], InteractionEvent::WillEnd(_)));
//! assert_eq!(events[1], InteractionEvent::DidEnd { detent: presets::LARGE });
//! ```

mod change;
mod config;
mod controller;
mod direction;
mod error;
mod event;
mod host;
mod keyboard;
mod mapper;

pub use change::{DetentInfo, InteractionChange, InteractionEnd, Progress};
pub use config::{InteractionConfig, InvariantPolicy, PercentageMode};
pub use controller::{Events, SheetInteraction};
pub use direction::Directions;
pub use error::InteractionError;
pub use event::{GesturePhase, InteractionEvent, KeyboardEvent};
pub use host::{SheetHost, SheetSnapshot};
pub use keyboard::KeyboardObserver;
pub use mapper::{animating, map_sample, percentage_total};
