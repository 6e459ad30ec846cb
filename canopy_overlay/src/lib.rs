// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Overlay: the trigger-anchored placement decision for the panel.
//!
//! The overlay surface is rendered outside normal layout containment and
//! positioned relative to the trigger's measured bounds. This crate owns
//! only the **decision**: given the panel-open flag and the anchor's bounds
//! at the moment of render, either produce an [`OverlayPlacement`] or decide
//! that nothing should be rendered at all.
//!
//! Two rules have no exceptions:
//!
//! - A closed panel renders *nothing* — no hidden presence that could
//!   compete for focus or tab order.
//! - An open panel whose anchor is missing or unmeasurable (unmounted,
//!   zero-size, non-finite bounds) also renders nothing. This is a
//!   defensive rule equivalent to "closed" for output purposes; the open
//!   flag itself is host state and is left untouched.
//!
//! Placement is pluggable via [`PlacementPolicy`]; [`BelowAnchor`] is the
//! conventional dropdown arrangement, directly below the anchor and
//! matching its width. Re-measuring the anchor on scroll or resize while
//! open is a host concern, not handled here.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_overlay::{BelowAnchor, resolve_overlay};
//! use kurbo::Rect;
//!
//! let anchor = Rect::new(10.0, 10.0, 110.0, 34.0);
//! let policy = BelowAnchor::new(160.0);
//!
//! // Closed: nothing, regardless of the anchor.
//! assert!(resolve_overlay(false, Some(anchor), &policy).is_none());
//!
//! // Open with a measurable anchor: placed below, matching width.
//! let placement = resolve_overlay(true, Some(anchor), &policy).unwrap();
//! assert_eq!(placement.origin.y, 34.0);
//! assert_eq!(placement.size.width, 100.0);
//!
//! // Open but unmounted: nothing.
//! assert!(resolve_overlay(true, None, &policy).is_none());
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point
//!   math.
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Point, Rect, Size};

/// Where and how large the overlay surface should be rendered.
///
/// Coordinates live in the same space as the anchor bounds the host
/// measured (typically the surface/world space of the widget tree).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OverlayPlacement {
    /// Top-left corner of the surface.
    pub origin: Point,
    /// Suggested surface size.
    pub size: Size,
}

/// Trait for overlay placement policies.
///
/// A policy receives the anchor's measured bounds and returns where the
/// surface goes. It is only consulted for an open panel with a measurable
/// anchor; the render-nothing rules are applied before it runs.
pub trait PlacementPolicy {
    /// Compute the placement for the given anchor bounds.
    fn place(&self, anchor: Rect) -> OverlayPlacement;
}

/// The conventional dropdown arrangement: directly below the anchor,
/// matching the anchor's width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BelowAnchor {
    /// Suggested surface height.
    pub height: f64,
    /// Vertical gap between the anchor's bottom edge and the surface.
    pub gap: f64,
}

impl BelowAnchor {
    /// Creates a policy with the given surface height and no gap.
    #[must_use]
    pub const fn new(height: f64) -> Self {
        Self { height, gap: 0.0 }
    }

    /// Sets the vertical gap below the anchor.
    #[must_use]
    pub const fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }
}

impl PlacementPolicy for BelowAnchor {
    fn place(&self, anchor: Rect) -> OverlayPlacement {
        OverlayPlacement {
            origin: Point::new(anchor.x0, anchor.y1 + self.gap),
            size: Size::new(anchor.width(), self.height),
        }
    }
}

/// `true` if the rect can anchor an overlay: finite bounds with strictly
/// positive width and height.
#[must_use]
pub fn measurable(rect: Rect) -> bool {
    rect.x0.is_finite()
        && rect.y0.is_finite()
        && rect.x1.is_finite()
        && rect.y1.is_finite()
        && rect.width() > 0.0
        && rect.height() > 0.0
}

/// Decides the overlay render output from the open flag and the anchor's
/// bounds at the moment of render.
///
/// Returns `None` — render nothing — when the panel is closed, when no
/// anchor is registered, or when the anchor's bounds are unmeasurable.
/// Otherwise delegates to the policy. The decision is pure; no state is
/// mutated either way.
#[must_use]
pub fn resolve_overlay(
    is_open: bool,
    anchor: Option<Rect>,
    policy: &impl PlacementPolicy,
) -> Option<OverlayPlacement> {
    if !is_open {
        return None;
    }
    let rect = anchor?;
    if !measurable(rect) {
        return None;
    }
    Some(policy.place(rect))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHOR: Rect = Rect::new(20.0, 50.0, 140.0, 82.0);

    #[test]
    fn closed_panel_renders_nothing_regardless_of_anchor() {
        let policy = BelowAnchor::new(200.0);
        assert!(resolve_overlay(false, Some(ANCHOR), &policy).is_none());
        assert!(resolve_overlay(false, None, &policy).is_none());
    }

    #[test]
    fn open_panel_with_measurable_anchor_places_below_matching_width() {
        let policy = BelowAnchor::new(200.0);
        let placement = resolve_overlay(true, Some(ANCHOR), &policy)
            .expect("measurable anchor should place");
        assert_eq!(placement.origin, Point::new(20.0, 82.0));
        assert_eq!(placement.size, Size::new(120.0, 200.0));
    }

    #[test]
    fn gap_offsets_the_surface_downward() {
        let policy = BelowAnchor::new(200.0).with_gap(4.0);
        let placement = resolve_overlay(true, Some(ANCHOR), &policy).unwrap();
        assert_eq!(placement.origin.y, 86.0);
    }

    #[test]
    fn open_panel_without_anchor_renders_nothing() {
        let policy = BelowAnchor::new(200.0);
        assert!(resolve_overlay(true, None, &policy).is_none());
    }

    #[test]
    fn zero_size_anchor_is_unmeasurable() {
        let policy = BelowAnchor::new(200.0);
        let collapsed = Rect::new(20.0, 50.0, 20.0, 50.0);
        assert!(!measurable(collapsed));
        assert!(resolve_overlay(true, Some(collapsed), &policy).is_none());

        let zero_width = Rect::new(20.0, 50.0, 20.0, 82.0);
        assert!(resolve_overlay(true, Some(zero_width), &policy).is_none());
    }

    #[test]
    fn non_finite_anchor_is_unmeasurable() {
        let policy = BelowAnchor::new(200.0);
        let nan = Rect::new(f64::NAN, 0.0, 10.0, 10.0);
        assert!(!measurable(nan));
        assert!(resolve_overlay(true, Some(nan), &policy).is_none());

        let inf = Rect::new(0.0, 0.0, f64::INFINITY, 10.0);
        assert!(resolve_overlay(true, Some(inf), &policy).is_none());
    }

    #[test]
    fn placement_derives_from_anchor_bounds_at_render_time() {
        let policy = BelowAnchor::new(100.0);
        let moved = ANCHOR + kurbo::Vec2::new(0.0, 30.0);
        let before = resolve_overlay(true, Some(ANCHOR), &policy).unwrap();
        let after = resolve_overlay(true, Some(moved), &policy).unwrap();
        assert_eq!(after.origin.y - before.origin.y, 30.0);
        assert_eq!(after.size, before.size);
    }
}
