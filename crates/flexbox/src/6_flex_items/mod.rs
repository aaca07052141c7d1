//! Flex items: the per-child inputs of the algorithm.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>

use geometry::Size;
use serde::{Deserialize, Serialize};

/// Per-side lengths, used for margins.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Edges {
    pub const ZERO: Self = Self::all(0.0);

    #[inline]
    pub const fn all(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    #[inline]
    pub fn horizontal(self) -> f32 {
        self.left + self.right
    }

    #[inline]
    pub fn vertical(self) -> f32 {
        self.top + self.bottom
    }
}

/// One in-flow child as the algorithm sees it.
///
/// Zero means "unset" for `size` (auto) and `percent`. `computed` carries whatever the previous
/// pass resolved for the child: its own intrinsic size, or a percentage resolved against this
/// container.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlexItem {
    /// Explicit width and height.
    pub size: Size,
    /// Width and height in percent of the container (`100.0` is the full container).
    pub percent: Size,
    pub computed: Size,
    pub margin: Edges,
    pub grow: f32,
    pub shrink: f32,
}

impl FlexItem {
    /// Explicit width if set, otherwise the computed width.
    #[inline]
    pub fn resolved_width(&self) -> f32 {
        if self.size.width != 0.0 {
            self.size.width
        } else {
            self.computed.width
        }
    }

    /// Explicit height if set, otherwise the computed height.
    #[inline]
    pub fn resolved_height(&self) -> f32 {
        if self.size.height != 0.0 {
            self.size.height
        } else {
            self.computed.height
        }
    }

    #[inline]
    pub fn resolved_size(&self) -> Size {
        Size::new(self.resolved_width(), self.resolved_height())
    }

    /// A width given explicitly or as a percentage is never stretched.
    #[inline]
    pub fn is_width_fixed(&self) -> bool {
        self.size.width != 0.0 || self.percent.width != 0.0
    }

    #[inline]
    pub fn is_height_fixed(&self) -> bool {
        self.size.height != 0.0 || self.percent.height != 0.0
    }
}
