// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Button and modifier vocabulary, raw host input, and the normalized sample.

use kurbo::Point;

use crate::transform::ClientTransform;

/// The button carried by a single pointer event.
///
/// This is a per-sample value, not a mask. Configuration and pressed state
/// use [`ButtonSet`]; convert at the boundary with [`Button::as_set`] or
/// [`ButtonSet::contains_button`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Button {
    /// No recognized button (e.g. an auxiliary button the region does not model).
    #[default]
    None,
    /// The primary button.
    Left,
    /// The middle button or wheel press.
    Middle,
    /// The secondary (context) button.
    Right,
}

impl Button {
    /// Map a host button ordinal to a button.
    ///
    /// Hosts report the primary button as `0`, the middle button as `1`, and
    /// the secondary button as `2`. Every other ordinal maps to
    /// [`Button::None`]. Total over the whole ordinal domain.
    pub const fn from_ordinal(ordinal: u16) -> Self {
        match ordinal {
            0 => Self::Left,
            1 => Self::Middle,
            2 => Self::Right,
            _ => Self::None,
        }
    }

    /// The singleton [`ButtonSet`] for this button.
    ///
    /// [`Button::None`] converts to the empty set.
    pub const fn as_set(self) -> ButtonSet {
        match self {
            Self::None => ButtonSet::empty(),
            Self::Left => ButtonSet::LEFT,
            Self::Middle => ButtonSet::MIDDLE,
            Self::Right => ButtonSet::RIGHT,
        }
    }
}

bitflags::bitflags! {
    /// A set of pointer buttons.
    ///
    /// Used for the accepted-buttons configuration and the pressed-buttons
    /// state of a region.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ButtonSet: u8 {
        /// The primary button.
        const LEFT   = 0b0000_0001;
        /// The middle button or wheel press.
        const MIDDLE = 0b0000_0010;
        /// The secondary (context) button.
        const RIGHT  = 0b0000_0100;
    }
}

impl Default for ButtonSet {
    /// The primary button only.
    fn default() -> Self {
        Self::LEFT
    }
}

impl ButtonSet {
    /// Whether this set contains the given single button.
    ///
    /// [`Button::None`] is contained in no set, including the full one.
    pub const fn contains_button(self, button: Button) -> bool {
        match button {
            Button::None => false,
            _ => self.intersects(button.as_set()),
        }
    }
}

bitflags::bitflags! {
    /// Keyboard modifiers held during a pointer event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// The control key.
        const CTRL  = 0b0000_0001;
        /// The alt/option key.
        const ALT   = 0b0000_0010;
        /// The shift key.
        const SHIFT = 0b0000_0100;
        /// The meta/command key.
        const META  = 0b0000_1000;
    }
}

impl Modifiers {
    /// Combine the four independent host modifier flags into a mask.
    ///
    /// Each bit is present iff its host flag is set; the flags compose by OR
    /// and do not interact.
    pub const fn from_host(ctrl: bool, alt: bool, shift: bool, meta: bool) -> Self {
        let mut out = Self::empty();
        if ctrl {
            out = out.union(Self::CTRL);
        }
        if alt {
            out = out.union(Self::ALT);
        }
        if shift {
            out = out.union(Self::SHIFT);
        }
        if meta {
            out = out.union(Self::META);
        }
        out
    }
}

/// One raw pointer event as delivered by the host, before normalization.
///
/// Carries both positions a host reports for an event: `screen` in the
/// input source's coordinates (used while a drag transform is held) and
/// `local` in the surface's own coordinates (used otherwise).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointerInput {
    /// Position in the input source's screen coordinates.
    pub screen: Point,
    /// Position local to the surface, as reported by the host.
    pub local: Point,
    /// Host button ordinal (`0` = primary).
    pub button: u16,
    /// Control key held.
    pub ctrl: bool,
    /// Alt/option key held.
    pub alt: bool,
    /// Shift key held.
    pub shift: bool,
    /// Meta/command key held.
    pub meta: bool,
}

/// Normalized snapshot of one pointer event, in logical coordinates.
///
/// Produced per raw event by [`PointerSample::capture`] and consumed
/// immediately: it updates region state and populates signal payloads, and
/// is never persisted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerSample {
    /// Pointer position in the region's logical coordinate space.
    pub pos: Point,
    /// The button that triggered the event, if any.
    pub button: Button,
    /// Keyboard modifiers held during the event.
    pub modifiers: Modifiers,
    /// Whether the event is accepted. Starts true; collaborators may clear
    /// it in their handlers.
    pub accepted: bool,
}

impl PointerSample {
    /// Normalize a raw host event into a sample.
    ///
    /// While `transform` is present (a drag is active), the position is the
    /// screen position mapped through it. Otherwise the surface-local
    /// position is used directly, assuming it already equals logical
    /// coordinates. Hover-path samples are therefore not corrected for any
    /// element-level scale; only drag samples are.
    pub fn capture(input: &PointerInput, transform: Option<&ClientTransform>) -> Self {
        let pos = match transform {
            Some(t) => t.apply(input.screen),
            None => input.local,
        };
        Self {
            pos,
            button: Button::from_ordinal(input.button),
            modifiers: Modifiers::from_host(input.ctrl, input.alt, input.shift, input.meta),
            accepted: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_mapping_for_known_buttons() {
        assert_eq!(Button::from_ordinal(0), Button::Left);
        assert_eq!(Button::from_ordinal(1), Button::Middle);
        assert_eq!(Button::from_ordinal(2), Button::Right);
    }

    // Anything outside {0,1,2} is an unrecognized button, including the
    // back/forward ordinals 3 and 4.
    #[test]
    fn ordinal_mapping_falls_back_to_none() {
        assert_eq!(Button::from_ordinal(3), Button::None);
        assert_eq!(Button::from_ordinal(4), Button::None);
        assert_eq!(Button::from_ordinal(u16::MAX), Button::None);
    }

    #[test]
    fn button_to_set_conversion() {
        assert_eq!(Button::Left.as_set(), ButtonSet::LEFT);
        assert_eq!(Button::Middle.as_set(), ButtonSet::MIDDLE);
        assert_eq!(Button::Right.as_set(), ButtonSet::RIGHT);
        assert!(Button::None.as_set().is_empty());
    }

    #[test]
    fn set_contains_single_button() {
        let set = ButtonSet::LEFT | ButtonSet::RIGHT;
        assert!(set.contains_button(Button::Left));
        assert!(!set.contains_button(Button::Middle));
        assert!(set.contains_button(Button::Right));
        // None is in no set, even the full one.
        assert!(!ButtonSet::all().contains_button(Button::None));
    }

    #[test]
    fn accepted_buttons_default_is_primary_only() {
        assert_eq!(ButtonSet::default(), ButtonSet::LEFT);
    }

    // Each flag contributes its bit independently; the combined mask is the
    // OR of the four single-flag masks.
    #[test]
    fn modifier_mapping_is_compositional() {
        for bits in 0u8..16 {
            let (c, a, s, m) = (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0);
            let combined = Modifiers::from_host(c, a, s, m);
            let composed = Modifiers::from_host(c, false, false, false)
                | Modifiers::from_host(false, a, false, false)
                | Modifiers::from_host(false, false, s, false)
                | Modifiers::from_host(false, false, false, m);
            assert_eq!(combined, composed);
        }
        assert_eq!(Modifiers::from_host(false, false, false, false), Modifiers::empty());
        assert_eq!(Modifiers::from_host(true, true, true, true), Modifiers::all());
    }

    #[test]
    fn capture_uses_local_position_without_transform() {
        let input = PointerInput {
            screen: Point::new(200.0, 300.0),
            local: Point::new(12.0, 34.0),
            button: 0,
            ctrl: true,
            ..PointerInput::default()
        };
        let sample = PointerSample::capture(&input, None);
        assert_eq!(sample.pos, Point::new(12.0, 34.0));
        assert_eq!(sample.button, Button::Left);
        assert_eq!(sample.modifiers, Modifiers::CTRL);
        assert!(sample.accepted);
    }

    #[test]
    fn capture_maps_screen_position_through_transform() {
        let t = ClientTransform::from_bounds(
            kurbo::Rect::new(10.0, 20.0, 110.0, 70.0),
            100.0,
            50.0,
        );
        let input = PointerInput {
            screen: Point::new(60.0, 45.0),
            local: Point::new(999.0, 999.0), // must be ignored while dragging
            button: 2,
            ..PointerInput::default()
        };
        let sample = PointerSample::capture(&input, Some(&t));
        assert_eq!(sample.pos, Point::new(50.0, 25.0));
        assert_eq!(sample.button, Button::Right);
    }
}
