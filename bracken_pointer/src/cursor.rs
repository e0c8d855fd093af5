// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor shapes and their host presentation tokens.

/// Abstract cursor shape for an interaction region.
///
/// The shape is a region property; it is mapped to a host cursor token via
/// [`CursorShape::css_token`] only when the property changes, independently
/// of pointer events.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum CursorShape {
    /// The platform default arrow.
    #[default]
    Arrow,
    /// An upward-pointing arrow.
    UpArrow,
    /// A crosshair.
    Cross,
    /// An hourglass or watch.
    Wait,
    /// A text-insertion beam.
    IBeam,
    /// Vertical resize.
    SizeVer,
    /// Horizontal resize.
    SizeHor,
    /// Diagonal resize along the backslash axis.
    SizeBDiag,
    /// Diagonal resize along the slash axis.
    SizeFDiag,
    /// Omnidirectional resize.
    SizeAll,
    /// No cursor at all.
    Blank,
    /// Vertical splitter between rows.
    SplitV,
    /// Horizontal splitter between columns.
    SplitH,
    /// A pointing hand, typically over links.
    PointingHand,
    /// The action is not allowed here.
    Forbidden,
    /// Contextual help.
    WhatsThis,
    /// Busy, but still interactive.
    Busy,
    /// An open hand, ready to grab.
    OpenHand,
    /// A closed hand, mid-grab.
    ClosedHand,
    /// Drag-and-drop copy.
    DragCopy,
    /// Drag-and-drop move.
    DragMove,
    /// Drag-and-drop link.
    DragLink,
    /// A host-supplied bitmap cursor. Presented as the host's automatic cursor.
    Bitmap,
    /// A custom cursor. Presented as the host's automatic cursor.
    Custom,
}

impl CursorShape {
    /// The host cursor token for this shape.
    ///
    /// A fixed table; shapes without a native token ([`CursorShape::Bitmap`]
    /// and [`CursorShape::Custom`]) fall back to `"auto"`.
    pub const fn css_token(self) -> &'static str {
        match self {
            Self::Arrow => "default",
            Self::UpArrow => "n-resize",
            Self::Cross => "crosshair",
            Self::Wait => "wait",
            Self::IBeam => "text",
            Self::SizeVer => "ew-resize",
            Self::SizeHor => "ns-resize",
            Self::SizeBDiag => "nesw-resize",
            Self::SizeFDiag => "nwse-resize",
            Self::SizeAll => "all-scroll",
            Self::Blank => "none",
            Self::SplitV => "row-resize",
            Self::SplitH => "col-resize",
            Self::PointingHand => "pointer",
            Self::Forbidden => "not-allowed",
            Self::WhatsThis => "help",
            Self::Busy => "progress",
            Self::OpenHand => "grab",
            Self::ClosedHand => "grabbing",
            Self::DragCopy => "copy",
            Self::DragMove => "move",
            Self::DragLink => "alias",
            Self::Bitmap | Self::Custom => "auto",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_entries() {
        assert_eq!(CursorShape::Arrow.css_token(), "default");
        assert_eq!(CursorShape::PointingHand.css_token(), "pointer");
        assert_eq!(CursorShape::Blank.css_token(), "none");
        assert_eq!(CursorShape::OpenHand.css_token(), "grab");
        assert_eq!(CursorShape::ClosedHand.css_token(), "grabbing");
        assert_eq!(CursorShape::DragLink.css_token(), "alias");
    }

    // SizeVer/SizeHor pair with the crossed CSS axes; the pairing is part
    // of the fixed table.
    #[test]
    fn resize_tokens_keep_crossed_pairing() {
        assert_eq!(CursorShape::SizeVer.css_token(), "ew-resize");
        assert_eq!(CursorShape::SizeHor.css_token(), "ns-resize");
    }

    #[test]
    fn out_of_table_shapes_fall_back_to_auto() {
        assert_eq!(CursorShape::Bitmap.css_token(), "auto");
        assert_eq!(CursorShape::Custom.css_token(), "auto");
    }

    #[test]
    fn default_shape_is_arrow() {
        assert_eq!(CursorShape::default(), CursorShape::Arrow);
    }
}
