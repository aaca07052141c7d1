//! Main/cross axis mapping.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#box-model>

use crate::chapter5::FlexDirection;
use crate::chapter6::{Edges, FlexItem};
use geometry::{Point, Size};

/// Resolved axes of a flex container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Axes {
    /// True when the main axis is horizontal (row layout).
    pub main_is_horizontal: bool,
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
#[inline]
pub const fn resolve_axes(direction: FlexDirection) -> Axes {
    Axes {
        main_is_horizontal: matches!(direction, FlexDirection::Row),
    }
}

impl Axes {
    #[inline]
    pub const fn main(self, size: Size) -> f32 {
        if self.main_is_horizontal {
            size.width
        } else {
            size.height
        }
    }

    #[inline]
    pub const fn cross(self, size: Size) -> f32 {
        if self.main_is_horizontal {
            size.height
        } else {
            size.width
        }
    }

    /// Map a main/cross pair back to width/height.
    #[inline]
    pub const fn size(self, main: f32, cross: f32) -> Size {
        if self.main_is_horizontal {
            Size::new(main, cross)
        } else {
            Size::new(cross, main)
        }
    }

    /// Map a main/cross offset pair back to x/y.
    #[inline]
    pub const fn point(self, main: f32, cross: f32) -> Point {
        if self.main_is_horizontal {
            Point::new(main, cross)
        } else {
            Point::new(cross, main)
        }
    }

    /// Leading and trailing margins along the main axis.
    #[inline]
    pub const fn main_margins(self, margin: Edges) -> (f32, f32) {
        if self.main_is_horizontal {
            (margin.left, margin.right)
        } else {
            (margin.top, margin.bottom)
        }
    }

    /// Leading and trailing margins along the cross axis.
    #[inline]
    pub const fn cross_margins(self, margin: Edges) -> (f32, f32) {
        if self.main_is_horizontal {
            (margin.top, margin.bottom)
        } else {
            (margin.left, margin.right)
        }
    }

    /// Whether the item's cross size is explicit or a percentage.
    #[inline]
    pub fn is_cross_fixed(self, item: &FlexItem) -> bool {
        if self.main_is_horizontal {
            item.is_height_fixed()
        } else {
            item.is_width_fixed()
        }
    }
}
