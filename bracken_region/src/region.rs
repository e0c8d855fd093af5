// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interaction state machine: hover/press state, listener gating,
//! property updates, and signal firing.

use bracken_pointer::{ButtonSet, ClientTransform, CursorShape, PointerInput, PointerSample};
use kurbo::Point;

use crate::host::RegionHost;
use crate::signal::Signal;

/// A pointer-interaction region over a visual element.
///
/// ## Usage
///
/// - Construct with [`PointerRegion::new`], passing the host handle, and
///   keep the logical size current with [`PointerRegion::set_size`].
/// - Configure with [`set_enabled`](PointerRegion::set_enabled),
///   [`set_hover_enabled`](PointerRegion::set_hover_enabled),
///   [`set_accepted_buttons`](PointerRegion::set_accepted_buttons), and
///   [`set_cursor_shape`](PointerRegion::set_cursor_shape).
/// - Deliver host events through the entry points:
///   [`hover_enter`](PointerRegion::hover_enter) /
///   [`hover_leave`](PointerRegion::hover_leave) /
///   [`hover_move`](PointerRegion::hover_move) for surface-scoped events,
///   [`press`](PointerRegion::press), then
///   [`drag_move`](PointerRegion::drag_move) /
///   [`release`](PointerRegion::release) from the process-wide source, and
///   [`click`](PointerRegion::click) for click and context activation.
/// - Observe through the property getters and the `on_*` signal
///   connections.
///
/// ## States
///
/// The machine's idle/hovering/pressed states are kept in two independent
/// pieces: `contains_mouse` follows the host's enter/leave tracking, and
/// the held [`ClientTransform`] marks an active drag. The
/// transform doubles as the grab flag, so "at most one pair of
/// process-wide listeners" is a condition on a single field rather than on
/// closure state.
pub struct PointerRegion<H: RegionHost> {
    host: H,
    width: f64,
    height: f64,

    enabled: bool,
    hover_enabled: bool,
    accepted_buttons: ButtonSet,
    cursor_shape: CursorShape,

    position: Point,
    pressed_buttons: ButtonSet,
    contains_mouse: bool,
    // Present iff a drag is active; captured at press, discarded at release.
    transform: Option<ClientTransform>,

    clicked: Signal<PointerSample>,
    entered: Signal<()>,
    exited: Signal<()>,
    position_changed: Signal<PointerSample>,
}

impl<H: RegionHost> core::fmt::Debug for PointerRegion<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PointerRegion")
            .field("enabled", &self.enabled)
            .field("hover_enabled", &self.hover_enabled)
            .field("accepted_buttons", &self.accepted_buttons)
            .field("cursor_shape", &self.cursor_shape)
            .field("position", &self.position)
            .field("pressed", &self.transform.is_some())
            .field("pressed_buttons", &self.pressed_buttons)
            .field("contains_mouse", &self.contains_mouse)
            .finish_non_exhaustive()
    }
}

impl<H: RegionHost> PointerRegion<H> {
    /// Create a region with default configuration: enabled, hover tracking
    /// off, primary button accepted, arrow cursor, zero logical size.
    pub fn new(host: H) -> Self {
        Self {
            host,
            width: 0.0,
            height: 0.0,
            enabled: true,
            hover_enabled: false,
            accepted_buttons: ButtonSet::default(),
            cursor_shape: CursorShape::default(),
            position: Point::ZERO,
            pressed_buttons: ButtonSet::empty(),
            contains_mouse: false,
            transform: None,
            clicked: Signal::new(),
            entered: Signal::new(),
            exited: Signal::new(),
            position_changed: Signal::new(),
        }
    }

    /// Borrow the injected host handle.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutably borrow the injected host handle.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // --- configuration ----------------------------------------------------

    /// Whether the region reacts to presses, hover moves, and clicks.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the region.
    ///
    /// Checked at press time and per hover-move/click event. An active drag
    /// is unaffected: it keeps tracking and ends only on release.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether surface-scoped moves update the position while not pressed.
    pub fn hover_enabled(&self) -> bool {
        self.hover_enabled
    }

    /// Enable or disable hover position tracking.
    pub fn set_hover_enabled(&mut self, hover_enabled: bool) {
        self.hover_enabled = hover_enabled;
    }

    /// The buttons that produce `clicked` and decide context suppression.
    pub fn accepted_buttons(&self) -> ButtonSet {
        self.accepted_buttons
    }

    /// Set the accepted buttons.
    ///
    /// Enforced only at click time; a press with an unaccepted button still
    /// starts a drag and records its button in
    /// [`pressed_buttons`](PointerRegion::pressed_buttons).
    pub fn set_accepted_buttons(&mut self, buttons: ButtonSet) {
        self.accepted_buttons = buttons;
    }

    /// The abstract cursor shape presented over the region.
    pub fn cursor_shape(&self) -> CursorShape {
        self.cursor_shape
    }

    /// Set the cursor shape.
    ///
    /// Applies the mapped host token via
    /// [`RegionHost::set_cursor`] when, and only when, the value changes.
    pub fn set_cursor_shape(&mut self, shape: CursorShape) {
        if self.cursor_shape != shape {
            self.cursor_shape = shape;
            self.host.set_cursor(shape.css_token());
        }
    }

    /// Update the region's logical size, as read from the owning element.
    ///
    /// Consulted at press time to capture the drag coordinate transform.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    // --- observable properties --------------------------------------------

    /// The last known pointer position, in logical coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Whether a press is currently held.
    pub fn is_pressed(&self) -> bool {
        self.transform.is_some()
    }

    /// The buttons recorded by the current press; empty while not pressed.
    pub fn pressed_buttons(&self) -> ButtonSet {
        self.pressed_buttons
    }

    /// Whether the pointer is within the region's hover boundary.
    pub fn contains_mouse(&self) -> bool {
        self.contains_mouse
    }

    // --- signal connections -----------------------------------------------

    /// Run `handler` on every accepted click or context activation.
    pub fn on_clicked(&mut self, handler: impl FnMut(&PointerSample) + 'static) {
        self.clicked.connect(handler);
    }

    /// Run `handler` whenever the pointer enters the region.
    pub fn on_entered(&mut self, mut handler: impl FnMut() + 'static) {
        self.entered.connect(move |&()| handler());
    }

    /// Run `handler` whenever the pointer leaves the region.
    pub fn on_exited(&mut self, mut handler: impl FnMut() + 'static) {
        self.exited.connect(move |&()| handler());
    }

    /// Run `handler` on every tracked pointer move (hover or drag).
    pub fn on_position_changed(&mut self, handler: impl FnMut(&PointerSample) + 'static) {
        self.position_changed.connect(handler);
    }

    // --- host event entry points ------------------------------------------

    /// The pointer entered the surface.
    ///
    /// Sets [`contains_mouse`](PointerRegion::contains_mouse) and fires
    /// `entered`. Hover tracking is independent of `enabled` and of any
    /// active drag.
    pub fn hover_enter(&mut self) {
        self.contains_mouse = true;
        self.entered.emit(&());
    }

    /// The pointer left the surface.
    ///
    /// Clears [`contains_mouse`](PointerRegion::contains_mouse) and fires
    /// `exited`. During a drag this records the pointer leaving the bounds
    /// without ending the drag.
    pub fn hover_leave(&mut self) {
        self.contains_mouse = false;
        self.exited.emit(&());
    }

    /// A surface-scoped pointer move.
    ///
    /// Updates the position and fires `position_changed`, but only while
    /// `enabled`, `hover_enabled`, and not pressed: during a drag the
    /// process-wide path ([`drag_move`](PointerRegion::drag_move)) owns
    /// position updates. The sample uses the raw surface-local position.
    pub fn hover_move(&mut self, input: &PointerInput) {
        if !self.enabled || !self.hover_enabled || self.is_pressed() {
            return;
        }
        self.update_position(input);
    }

    /// A press on the surface.
    ///
    /// Requires `enabled`. Captures the drag coordinate transform from the
    /// host's current bounding rectangle and the logical size, records the
    /// press-time sample (position and pressed buttons, the latter not
    /// constrained to the accepted set), and asks the host to attach the
    /// process-wide move/release listeners.
    ///
    /// A press while already pressed is a host-contract violation and is
    /// ignored, so a second grab can never stack on the first.
    pub fn press(&mut self, input: &PointerInput) {
        if !self.enabled || self.transform.is_some() {
            return;
        }
        let transform =
            ClientTransform::from_bounds(self.host.bounding_rect(), self.width, self.height);
        let sample = PointerSample::capture(input, Some(&transform));
        self.transform = Some(transform);
        self.position = sample.pos;
        self.pressed_buttons = sample.button.as_set();
        self.host.grab_pointer();
    }

    /// A move observed at the process-wide input source during a drag.
    ///
    /// Recomputes the sample through the transform captured at press time,
    /// updates the position, and fires `position_changed`. Runs regardless
    /// of `hover_enabled` and does not re-check `enabled` mid-drag. Ignored
    /// while not pressed.
    pub fn drag_move(&mut self, input: &PointerInput) {
        if self.transform.is_none() {
            return;
        }
        self.update_position(input);
    }

    /// A release observed at the process-wide input source.
    ///
    /// Clears the pressed state, discards the drag transform, and asks the
    /// host to detach the process-wide listeners. This is the single exit
    /// path from the pressed state; a release while not pressed is ignored.
    /// The hover state is left to the independent enter/leave tracking.
    pub fn release(&mut self) {
        if self.transform.take().is_none() {
            return;
        }
        self.pressed_buttons = ButtonSet::empty();
        self.host.ungrab_pointer();
    }

    /// A click or context activation on the surface.
    ///
    /// Fires `clicked` with the sample iff the region is `enabled` and the
    /// sample's button is within the accepted set. Returns whether the
    /// host's default context action should be suppressed: true iff the
    /// secondary button is within the accepted set, independent of this
    /// particular event's button.
    pub fn click(&mut self, input: &PointerInput) -> bool {
        let sample = PointerSample::capture(input, self.transform.as_ref());
        if self.enabled && self.accepted_buttons.contains_button(sample.button) {
            self.clicked.emit(&sample);
        }
        self.accepted_buttons.contains(ButtonSet::RIGHT)
    }

    fn update_position(&mut self, input: &PointerInput) {
        let sample = PointerSample::capture(input, self.transform.as_ref());
        self.position = sample.pos;
        self.position_changed.emit(&sample);
    }
}
