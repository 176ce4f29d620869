// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sheet_stack --heading-base-level=0

//! Understory Sheet Stack: forward sheet interaction events across stacked modal sheets.
//!
//! ## Overview
//!
//! Modal sheets present over one another: a non-modal root presenter shows sheet `A`, which
//! shows `B`, which shows `C`. When the user drags `C`, the sheets below usually want to
//! follow along, for example to dim or scale themselves. This crate keeps the stack in an
//! arena and forwards each event from the dragged sheet down to everyone who opted in.
//!
//! - [`SheetStack`] owns root presenters and [`SheetNode`]s linked by presenting ids.
//! - [`SheetStack::route`] walks the stack for one event and returns the ordered [`Route`].
//! - [`SheetStack::dispatch`] delivers an event along that route.
//! - [`SheetStack::handle_pan`] and [`SheetStack::run_deferred`] drive a sheet's
//!   [`SheetInteraction`](understory_sheet_interaction::SheetInteraction) and forward what it
//!   produces.
//!
//! ## Ordering
//!
//! Delivery is top-down: the origin sheet, then each participating sheet below it, then the
//! root presenter. Every recipient is notified at most once per event. A sheet hosting a
//! [`NavigationForwarding`] stack relays to its opted-in children, top child first, before its
//! own surface.
//!
//! ## Participation
//!
//! - A sheet participates when it carries an interaction controller. Others are skipped.
//! - A surface answers [`ForwardingBehavior::should_handle_sheet_interaction`] per event.
//! - The origin's [`ForwardingBehavior::should_notify_root_presenter`] decides whether the
//!   root presenter is told. A root without a delegate is logged and skipped.
//! - Keyboard notifications reach only the affected sheet.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use understory_detent::DetentId;
//! use understory_sheet_interaction::{InteractionChange, InteractionEnd, InteractionEvent};
//! use understory_sheet_stack::{
//!     ForwardingBehavior, SheetContext, SheetInteractionDelegate, SheetNode, SheetStack,
//! };
//!
//! struct Surface(&'static str, Rc<RefCell<Vec<&'static str>>>);
//!
//! impl SheetInteractionDelegate for Surface {
//!     fn began(&mut self, _: &SheetContext, _: &DetentId) {
//!         self.1.borrow_mut().push(self.0);
//!     }
//!     fn changed(&mut self, _: &SheetContext, _: &InteractionChange) {}
//!     fn will_end(&mut self, _: &SheetContext, _: &InteractionEnd) {}
//!     fn did_end(&mut self, _: &SheetContext, _: &DetentId) {}
//! }
//!
//! impl ForwardingBehavior for Surface {
//!     fn should_handle_sheet_interaction(&self, _: &SheetContext) -> bool {
//!         true
//!     }
//!     fn should_notify_root_presenter(&self) -> bool {
//!         true
//!     }
//! }
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let mut stack = SheetStack::new();
//! let root = stack.insert_root(Some(Box::new(Surface("root", log.clone()))));
//! let a = stack.present(root, SheetNode::participating(Surface("a", log.clone()))).unwrap();
//! let b = stack.present(a, SheetNode::participating(Surface("b", log.clone()))).unwrap();
//!
//! let began = InteractionEvent::Began { detent: DetentId::from_static("medium") };
//! stack.dispatch(b, &began).unwrap();
//! assert_eq!(*log.borrow(), ["b", "a", "root"]);
//! ```

mod delegate;
mod dispatcher;
mod error;
mod navigation;
mod node;
mod router;
mod stack;
mod types;

pub use delegate::{ForwardingBehavior, SheetInteractionDelegate, StackSurface};
pub use error::StackError;
pub use navigation::NavigationForwarding;
pub use node::SheetNode;
pub use stack::SheetStack;
pub use types::{Delivery, Recipient, Route, SheetContext, SheetId};
