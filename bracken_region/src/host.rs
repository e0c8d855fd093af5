// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The injected host seam: surface geometry, pointer grabs, and cursor
//! presentation.

use kurbo::Rect;

/// Host-side effects a [`PointerRegion`](crate::region::PointerRegion) needs.
///
/// The handle is injected at construction so tests can substitute a fake
/// host without a real windowing environment. All methods are called
/// synchronously from within the region's event entry points.
///
/// ## Grab discipline
///
/// [`grab_pointer`](RegionHost::grab_pointer) asks the host to attach
/// move/release listeners at the process-wide input source (not scoped to
/// the surface), so drag tracking continues when the pointer leaves the
/// region's bounds. [`ungrab_pointer`](RegionHost::ungrab_pointer) detaches
/// them. The region guarantees the calls pair exactly: at most one grab is
/// outstanding per region at any time, and every grab is ended by exactly
/// one ungrab.
pub trait RegionHost {
    /// The surface's current on-screen bounding rectangle.
    ///
    /// Queried once per press to capture the drag coordinate transform.
    fn bounding_rect(&self) -> Rect;

    /// Attach process-wide move/release listeners for drag tracking.
    fn grab_pointer(&mut self);

    /// Detach the process-wide move/release listeners.
    fn ungrab_pointer(&mut self);

    /// Apply a cursor token to the surface presentation.
    ///
    /// Called only when the region's cursor-shape property changes.
    fn set_cursor(&mut self, token: &'static str);
}

/// A host that reports empty bounds and ignores every effect.
///
/// Useful as a stand-in when exercising a region without a windowing
/// environment, or for regions that never drag.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullHost;

impl RegionHost for NullHost {
    #[inline]
    fn bounding_rect(&self) -> Rect {
        Rect::ZERO
    }

    #[inline]
    fn grab_pointer(&mut self) {}

    #[inline]
    fn ungrab_pointer(&mut self) {}

    #[inline]
    fn set_cursor(&mut self, _token: &'static str) {}
}
