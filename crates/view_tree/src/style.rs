//! Per-node style attributes.

use flexbox::{
    AbsoluteOffsets, AlignContent, AlignItems, Display, Edges, FlexContainer, FlexDirection,
    FlexItem, FlexWrap, JustifyContent, Position,
};
use geometry::{Rect, Size};
use serde::{Deserialize, Serialize};

/// Layout attributes of one view.
///
/// Zero means auto for `width`/`height` and unset for the percentages. `right` and `bottom` are
/// optional because an unset edge and a zero edge place an absolute box differently. Missing
/// fields deserialize to their defaults, so a style can be written as sparse JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Style {
    pub left: f32,
    pub top: f32,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub width: f32,
    pub height: f32,
    /// Width in percent of the parent (`100.0` is the full parent width).
    pub width_pct: f32,
    /// Height in percent of the parent.
    pub height_pct: f32,
    pub margin: Edges,
    pub position: Position,
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    pub justify: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
    pub grow: f32,
    pub shrink: f32,
    pub display: Display,
    /// Hidden views are laid out but neither drawn nor hit.
    pub hidden: bool,
}

impl Style {
    /// Whether this view takes part in its parent's flex layout.
    #[inline]
    pub const fn is_flow(&self) -> bool {
        flexbox::is_flow_child(self.display, self.position)
    }

    /// Whether this view is positioned against its parent's frame instead of flowing.
    #[inline]
    pub const fn is_absolute(&self) -> bool {
        matches!(self.display, Display::Flex) && matches!(self.position, Position::Absolute)
    }

    /// Whether draw and hit testing should visit this view.
    #[inline]
    pub const fn is_visible(&self) -> bool {
        !self.hidden && matches!(self.display, Display::Flex)
    }

    /// The frame a parentless view derives from its own attributes.
    #[inline]
    pub fn root_frame(&self) -> Rect {
        Rect::new(
            self.left,
            self.top,
            self.left + self.width,
            self.top + self.height,
        )
    }

    /// Container-side inputs for laying out this view's children inside `frame`.
    #[inline]
    pub const fn container(&self, frame: Rect) -> FlexContainer {
        FlexContainer {
            frame,
            direction: self.direction,
            wrap: self.wrap,
            justify: self.justify,
            align_items: self.align_items,
            align_content: self.align_content,
        }
    }

    /// Item-side inputs for this view as a child, given what the last pass computed for it.
    #[inline]
    pub const fn flex_item(&self, computed: Size) -> FlexItem {
        FlexItem {
            size: Size::new(self.width, self.height),
            percent: Size::new(self.width_pct, self.height_pct),
            computed,
            margin: self.margin,
            grow: self.grow,
            shrink: self.shrink,
        }
    }

    #[inline]
    pub const fn absolute_offsets(&self) -> AbsoluteOffsets {
        AbsoluteOffsets {
            left: self.left,
            top: self.top,
            right: self.right,
            bottom: self.bottom,
            size: Size::new(self.width, self.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if a sparse JSON style does not fill the remaining fields with defaults.
    fn sparse_json_uses_defaults() {
        let style: Style = serde_json::from_str(
            r#"{"width": 100, "direction": "column", "justify": "space-between", "right": 0}"#,
        )
        .unwrap_or_default();
        assert!((style.width - 100.0).abs() < 0.001);
        assert_eq!(style.direction, FlexDirection::Column);
        assert_eq!(style.justify, JustifyContent::SpaceBetween);
        assert_eq!(style.right, Some(0.0));
        assert_eq!(style.bottom, None);
        assert_eq!(style.align_items, AlignItems::Stretch);
    }

    #[test]
    /// # Panics
    /// Panics if an unknown keyword is accepted.
    fn unknown_keyword_is_rejected() {
        let parsed = serde_json::from_str::<Style>(r#"{"align-items": "baseline"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    /// # Panics
    /// Panics if flow, absolute and visibility classification disagree with the attributes.
    fn classification() {
        let absolute = Style {
            position: Position::Absolute,
            ..Style::default()
        };
        assert!(absolute.is_absolute());
        assert!(!absolute.is_flow());

        let none = Style {
            display: Display::None,
            position: Position::Absolute,
            ..Style::default()
        };
        assert!(!none.is_absolute());
        assert!(!none.is_visible());

        let hidden = Style {
            hidden: true,
            ..Style::default()
        };
        assert!(hidden.is_flow());
        assert!(!hidden.is_visible());
    }

    #[test]
    /// # Panics
    /// Panics if the root frame is not derived from offsets and size.
    fn root_frame_from_attributes() {
        let style = Style {
            left: 20.0,
            top: 30.0,
            width: 100.0,
            height: 200.0,
            ..Style::default()
        };
        assert_eq!(style.root_frame(), Rect::new(20.0, 30.0, 120.0, 230.0));
    }
}
