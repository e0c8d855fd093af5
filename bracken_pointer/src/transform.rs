// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-time coordinate correction: screen space to logical space.

use kurbo::{Point, Rect};

/// The affine mapping from input-source screen coordinates to a region's
/// logical coordinate space, captured at drag start.
///
/// A region's on-screen box may be stretched or repositioned relative to its
/// logical size (for example by an enclosing scale or position transform).
/// The mapping is computed once from the box observed at press time and held
/// fixed for the whole drag: re-querying per move would re-introduce the
/// distortion being corrected, and the element's own box may shift under
/// the pointer mid-drag.
///
/// A region holds a `ClientTransform` only between a press and its matching
/// release. Outside a drag, surface-local coordinates are used directly.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClientTransform {
    origin: Point,
    scale_x: f64,
    scale_y: f64,
}

impl ClientTransform {
    /// Capture the mapping from a screen-space bounding box and the region's
    /// logical size.
    ///
    /// The origin is the box's top-left corner. Each scale factor is the
    /// ratio of on-screen extent to logical extent; a non-positive logical
    /// extent yields a scale of `1.0` so the mapping stays well-defined.
    pub fn from_bounds(bounds: Rect, width: f64, height: f64) -> Self {
        Self {
            origin: bounds.origin(),
            scale_x: if width > 0.0 { bounds.width() / width } else { 1.0 },
            scale_y: if height > 0.0 { bounds.height() / height } else { 1.0 },
        }
    }

    /// Map a screen-space position into logical coordinates.
    pub fn apply(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.origin.x) / self.scale_x,
            (screen.y - self.origin.y) / self.scale_y,
        )
    }
}
