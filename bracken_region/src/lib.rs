// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bracken Region: a pointer-interaction region for UI surfaces.
//!
//! ## Overview
//!
//! A [`PointerRegion`](crate::region::PointerRegion) is an invisible
//! rectangular surface overlaid on a visual element. It converts raw host
//! pointer input (press, move, release, hover, click, context-activation)
//! into a normalized interaction model: observable properties
//! (`position`, `pressed`, `pressed_buttons`, `contains_mouse`) and discrete
//! signals (`clicked`, `entered`, `exited`, `position_changed`).
//!
//! The region does not listen to the host itself. The host (or a windowing
//! adapter) delivers events by calling the region's entry points, and the
//! region calls back into an injected [`RegionHost`](crate::host::RegionHost)
//! handle for the few effects it needs: querying the surface's on-screen
//! bounding box, attaching and detaching process-wide move/release
//! listeners, and applying a cursor token.
//!
//! ## Hover vs. drag tracking
//!
//! Position tracking runs in one of two modes with different listener
//! lifetimes:
//!
//! - **Hover**: while not pressed, surface-scoped moves update the position,
//!   gated on `enabled` and `hover_enabled` (re-checked every event).
//! - **Drag**: a press captures a
//!   [`ClientTransform`](bracken_pointer::ClientTransform) from the surface's
//!   current screen box and asks the host to attach process-wide listeners,
//!   so tracking continues when the pointer leaves the region's bounds.
//!   Drag moves are corrected through the captured transform and are not
//!   re-gated on `enabled`; a drag ends only on an observed release.
//!
//! Hover enter/leave state is tracked independently of dragging: leaving the
//! surface mid-drag clears `contains_mouse` without ending the drag.
//!
//! ## Minimal example
//!
//! ```
//! use bracken_pointer::PointerInput;
//! use bracken_region::{NullHost, PointerRegion};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let mut region = PointerRegion::new(NullHost);
//! let clicks = Rc::new(Cell::new(0));
//! let seen = clicks.clone();
//! region.on_clicked(move |_| seen.set(seen.get() + 1));
//!
//! let input = PointerInput { button: 0, ..PointerInput::default() };
//! region.press(&input);
//! region.release();
//! let suppress = region.click(&input);
//! assert_eq!(clicks.get(), 1);
//! // The secondary button is not accepted, so the host default
//! // context action stays available.
//! assert!(!suppress);
//! ```
//!
//! ## Host adapter sketch
//!
//! The snippet below shows how a windowing adapter could route its native
//! events into a region. Surface-scoped events always go to the surface
//! handlers; move and release events from the process-wide source matter
//! only while the region holds a grab.
//!
//! ```no_run
//! use bracken_pointer::PointerInput;
//! use bracken_region::{PointerRegion, RegionHost};
//!
//! enum HostEvent {
//!     Enter,
//!     Leave,
//!     SurfaceMove(PointerInput),
//!     Down(PointerInput),
//!     SourceMove(PointerInput),
//!     SourceUp,
//!     Click(PointerInput),
//!     ContextMenu(PointerInput),
//! }
//!
//! fn route<H: RegionHost>(region: &mut PointerRegion<H>, ev: HostEvent) {
//!     match ev {
//!         HostEvent::Enter => region.hover_enter(),
//!         HostEvent::Leave => region.hover_leave(),
//!         HostEvent::SurfaceMove(input) => region.hover_move(&input),
//!         HostEvent::Down(input) => region.press(&input),
//!         HostEvent::SourceMove(input) => region.drag_move(&input),
//!         HostEvent::SourceUp => region.release(),
//!         HostEvent::Click(input) => {
//!             let _ = region.click(&input);
//!         }
//!         HostEvent::ContextMenu(input) => {
//!             let suppress_default = region.click(&input);
//!             // Tell the host to skip its context menu when asked to.
//!             let _ = suppress_default;
//!         }
//!     }
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod host;
pub mod region;
pub mod signal;

pub use host::{NullHost, RegionHost};
pub use region::PointerRegion;
pub use signal::Signal;
