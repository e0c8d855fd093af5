// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bracken Pointer: a normalized pointer vocabulary for interaction regions.
//!
//! ## Overview
//!
//! This crate holds the pure, host-independent half of a pointer-interaction
//! region: the button and modifier vocabulary, the normalized per-event
//! [`PointerSample`], the drag-time coordinate correction
//! ([`ClientTransform`]), and the cursor shape table ([`CursorShape`]).
//! It performs no event listening and owns no state machine; feed it raw
//! host data ([`PointerInput`]) and consume plain values.
//!
//! ## Buttons vs. button sets
//!
//! A single event carries exactly one [`Button`]. Configuration and pressed
//! state are masks over buttons ([`ButtonSet`]). The two are distinct types
//! with explicit conversions ([`Button::as_set`],
//! [`ButtonSet::contains_button`]) so a sample's value can never be confused
//! with a mask.
//!
//! ## Coordinate spaces
//!
//! Host events arrive with two positions: one in the input source's screen
//! space and one local to the surface. While a drag holds a
//! [`ClientTransform`], samples are produced by mapping the screen position
//! through it; otherwise the surface-local position is used as-is. See
//! [`PointerSample::capture`] for the exact rule.
//!
//! This crate is `no_std`.

#![no_std]

mod cursor;
mod transform;
mod types;

pub use cursor::CursorShape;
pub use transform::ClientTransform;
pub use types::{Button, ButtonSet, Modifiers, PointerInput, PointerSample};
