//! Geometry primitives for box layout.
//!
//! All coordinates are absolute `f32` pixels. A [`Rect`] is stored as its two corners and is kept
//! normalized so `min` is never to the right of or below `max`.

use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

/// A 2D point or offset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Width and height of a box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle described by its top-left (`min`) and bottom-right (`max`) corners.
///
/// Construct through [`Rect::new`] or [`Rect::from_origin_size`] to keep the corners normalized.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self {
        min: Point::ZERO,
        max: Point::ZERO,
    };

    /// Build a rectangle from two corners given in any order.
    ///
    /// Coordinates are swapped as needed so that `min.x <= max.x` and `min.y <= max.y`.
    #[inline]
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        let (left, right) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (top, bottom) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        Self {
            min: Point::new(left, top),
            max: Point::new(right, bottom),
        }
    }

    /// Build a rectangle anchored at `origin` spanning `size`. Negative sizes are normalized.
    #[inline]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(
            origin.x,
            origin.y,
            origin.x + size.width,
            origin.y + size.height,
        )
    }

    /// Horizontal extent.
    #[inline]
    pub fn dx(self) -> f32 {
        self.max.x - self.min.x
    }

    /// Vertical extent.
    #[inline]
    pub fn dy(self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(self) -> Size {
        Size::new(self.dx(), self.dy())
    }

    /// Move both corners by `offset`.
    #[inline]
    pub fn translate(self, offset: Point) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Inclusive hit test: points on any edge or corner are inside.
    ///
    /// A zero-area rectangle still contains its own corner.
    #[inline]
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

impl Add<Point> for Rect {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Point) -> Self {
        self.translate(rhs)
    }
}

impl Sub<Point> for Rect {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Point) -> Self {
        self.translate(-rhs)
    }
}
