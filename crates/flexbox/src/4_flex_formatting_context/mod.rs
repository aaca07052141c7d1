//! Flex formatting context: which children take part in flex layout, and where the
//! absolutely-positioned ones go instead.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#abspos-items>

use core::fmt;
use geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

keyword_enum! {
    /// Display keywords understood by the engine. `None` removes the box from layout entirely.
    ///
    /// Spec: <https://www.w3.org/TR/css-display-3/#the-display-properties>
    Display {
        #[default]
        Flex => "flex",
        None => "none",
    }
}

keyword_enum! {
    /// Spec: <https://www.w3.org/TR/css-position-3/#position-property>
    Position {
        #[default]
        Static => "static",
        Absolute => "absolute",
    }
}

/// Returns true when a child participates in flex layout of its parent.
///
/// `display: none` children are skipped outright; absolute children are placed by
/// [`position_absolute`] and never enter line collection.
#[inline]
pub const fn is_flow_child(display: Display, position: Position) -> bool {
    matches!(display, Display::Flex) && matches!(position, Position::Static)
}

/// Offsets and explicit size of an absolutely-positioned child.
///
/// `left`/`top` apply when non-zero. `right`/`bottom` are optional because an unset edge and a
/// zero edge place the box differently.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AbsoluteOffsets {
    pub left: f32,
    pub top: f32,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    /// Explicit width and height; auto (zero) sizes stay zero.
    pub size: Size,
}

/// Place an absolutely-positioned child against its container's absolute frame.
///
/// Per axis: a non-zero leading offset wins, then a set trailing offset anchors the far edge,
/// otherwise the box sits at the container's leading edge.
pub fn position_absolute(container: Rect, offsets: &AbsoluteOffsets) -> Rect {
    let x = resolve_edge(
        container.min.x,
        container.max.x,
        offsets.left,
        offsets.right,
        offsets.size.width,
    );
    let y = resolve_edge(
        container.min.y,
        container.max.y,
        offsets.top,
        offsets.bottom,
        offsets.size.height,
    );
    Rect::from_origin_size(Point::new(x, y), offsets.size)
}

#[inline]
fn resolve_edge(start: f32, end: f32, leading: f32, trailing: Option<f32>, extent: f32) -> f32 {
    if leading != 0.0 {
        start + leading
    } else if let Some(trailing_offset) = trailing {
        end - trailing_offset - extent
    } else {
        start
    }
}
