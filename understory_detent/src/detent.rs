// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detent identifiers, resolvers, and comparison.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use crate::ResolutionContext;

/// Stable key naming a detent for the lifetime of a sheet.
///
/// Identifiers compare by content, so a statically borrowed id equals an owned id with
/// the same text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DetentId(Cow<'static, str>);

impl DetentId {
    /// Create an identifier from a static string. Usable in `const` items.
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    /// Create an identifier from an owned string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DetentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&'static str> for DetentId {
    fn from(id: &'static str) -> Self {
        Self::from_static(id)
    }
}

/// Signature of a custom detent resolver.
///
/// Returning `None` marks the detent inactive for the given context.
pub type ResolverFn = dyn Fn(&ResolutionContext) -> Option<f64>;

#[derive(Clone)]
enum Resolver {
    Fixed(f64),
    Fraction(f64),
    Custom(Rc<ResolverFn>),
}

/// A named resting height for a modal sheet.
///
/// Detents are cheap to clone; custom resolvers are reference counted.
/// They are not `Send`: like the sheets they describe, they live on the UI thread.
#[derive(Clone)]
pub struct Detent {
    id: DetentId,
    resolver: Resolver,
}

impl fmt::Debug for Detent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Detent");
        s.field("id", &self.id);
        match &self.resolver {
            Resolver::Fixed(h) => s.field("fixed", h),
            Resolver::Fraction(p) => s.field("fraction", p),
            Resolver::Custom(_) => s.field("resolver", &"custom"),
        };
        s.finish()
    }
}

impl Detent {
    /// A detent that always resolves to `height` points.
    pub fn fixed(id: impl Into<DetentId>, height: f64) -> Self {
        Self {
            id: id.into(),
            resolver: Resolver::Fixed(height),
        }
    }

    /// A detent that resolves to `fraction * maximum_detent_value`.
    pub fn fraction(id: impl Into<DetentId>, fraction: f64) -> Self {
        Self {
            id: id.into(),
            resolver: Resolver::Fraction(fraction),
        }
    }

    /// A detent with a caller-supplied resolver.
    ///
    /// ```
    /// use understory_detent::{Detent, Idiom, ResolutionContext, TraitSnapshot};
    ///
    /// // Only available on tablets.
    /// let pad_only = Detent::custom("tray", |cx: &ResolutionContext| {
    ///     (cx.container_traits.idiom == Idiom::Pad).then_some(cx.maximum_detent_value * 0.4)
    /// });
    /// let phone = ResolutionContext::new(TraitSnapshot::PHONE_PORTRAIT, 700.0);
    /// assert!(!pad_only.is_active(&phone));
    /// ```
    pub fn custom(
        id: impl Into<DetentId>,
        resolver: impl Fn(&ResolutionContext) -> Option<f64> + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            resolver: Resolver::Custom(Rc::new(resolver)),
        }
    }

    /// The detent's identifier.
    pub fn id(&self) -> &DetentId {
        &self.id
    }

    /// Resolve this detent's height for `cx`.
    ///
    /// Returns `None` when the detent is inactive. Non-finite resolver output is treated
    /// as inactive.
    pub fn resolved_value(&self, cx: &ResolutionContext) -> Option<f64> {
        let height = match &self.resolver {
            Resolver::Fixed(h) => Some(*h),
            Resolver::Fraction(p) => Some(cx.maximum_detent_value * p),
            Resolver::Custom(f) => f(cx),
        };
        height.filter(|h| h.is_finite())
    }

    /// Whether this detent resolves for `cx`.
    pub fn is_active(&self, cx: &ResolutionContext) -> bool {
        self.resolved_value(cx).is_some()
    }

    /// Returns `true` if this detent resolves to a greater height than `other`.
    ///
    /// An unresolved `self` is never greater. A resolved `self` is always greater than an
    /// unresolved `other`. Two unresolved detents compare as not greater either way.
    pub fn greater_than(&self, other: &Self, cx: &ResolutionContext) -> bool {
        let Some(a) = self.resolved_value(cx) else {
            return false;
        };
        let Some(b) = other.resolved_value(cx) else {
            return true;
        };
        a > b
    }
}
