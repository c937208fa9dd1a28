//! Geometric primitives for timeline and screen space.
//!
//! Both spaces use a y-up convention: growing a rectangle's `height`
//! moves its top edge upward.

use glam::{Affine2, Vec2 as GlamVec2};
use serde::{Deserialize, Serialize};

/// 2D vector.
pub type Vec2 = GlamVec2;

/// Axis-aligned rectangle. `(x, y)` is the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from two corners.
    pub fn from_corners(min: Vec2, max: Vec2) -> Self {
        Self {
            x: min.x,
            y: min.y,
            width: max.x - min.x,
            height: max.y - min.y,
        }
    }

    /// Minimum corner (bottom-left).
    #[inline]
    pub fn min(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Maximum corner (top-right).
    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    #[inline]
    pub fn left(self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.y
    }

    #[inline]
    pub fn top(self) -> f32 {
        self.y + self.height
    }

    /// Check if a point is inside the rectangle (edges inclusive).
    #[inline]
    pub fn contains(self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// 2D affine transformation, used to map timeline space onto the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    inner: Affine2,
}

impl Transform2D {
    /// Identity transform.
    pub const IDENTITY: Self = Self {
        inner: Affine2::IDENTITY,
    };

    /// Create a translation transform.
    #[inline]
    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            inner: Affine2::from_translation(Vec2::new(x, y)),
        }
    }

    /// Create a scale transform.
    #[inline]
    pub fn scale(x: f32, y: f32) -> Self {
        Self {
            inner: Affine2::from_scale(Vec2::new(x, y)),
        }
    }

    /// Create a transform that scales first and then translates.
    ///
    /// This is the usual timeline-to-screen mapping: `scale.x` is the zoom
    /// in pixels per time unit and `translation` the on-screen origin of the
    /// lane.
    pub fn from_scale_translation(scale: Vec2, translation: Vec2) -> Self {
        Self {
            inner: Affine2::from_scale_angle_translation(scale, 0.0, translation),
        }
    }

    /// Combine two transforms: `other` is applied first, then `self`.
    #[inline]
    pub fn then(self, other: Self) -> Self {
        Self {
            inner: self.inner * other.inner,
        }
    }

    /// Transform a point.
    #[inline]
    pub fn transform_point(self, point: Vec2) -> Vec2 {
        self.inner.transform_point2(point)
    }

    /// Transform a vector (ignores translation).
    #[inline]
    pub fn transform_vector(self, vec: Vec2) -> Vec2 {
        self.inner.transform_vector2(vec)
    }

    /// Get the inverse transform.
    #[inline]
    pub fn inverse(self) -> Self {
        Self {
            inner: self.inner.inverse(),
        }
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A rectangle positioned by its pivot.
///
/// `position` is where the pivot sits; `pivot` is the pivot's location inside
/// the rectangle as a fraction of its size (`(0, 0)` bottom-left,
/// `(1, 1)` top-right). Size is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchoredRect {
    pub position: Vec2,
    size: Vec2,
    pivot: Vec2,
}

impl AnchoredRect {
    /// Create a new anchored rectangle. Negative sizes clamp to zero and the
    /// pivot clamps into `0..=1`.
    pub fn new(position: Vec2, size: Vec2, pivot: Vec2) -> Self {
        Self {
            position,
            size: size.max(Vec2::ZERO),
            pivot: pivot.clamp(Vec2::ZERO, Vec2::ONE),
        }
    }

    /// Create a rectangle whose pivot is its bottom-left corner.
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.min(), Vec2::new(rect.width, rect.height), Vec2::ZERO)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn pivot(&self) -> Vec2 {
        self.pivot
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.position.x - self.pivot.x * self.size.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left() + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.position.y - self.pivot.y * self.size.y
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.bottom() + self.size.y
    }

    /// Axis-aligned bounds in the same space as `position`.
    pub fn rect(&self) -> Rect {
        Rect::new(self.left(), self.bottom(), self.size.x, self.size.y)
    }

    /// Resize horizontally around the pivot. Returns `true` if `width` was
    /// negative and had to be clamped.
    pub fn set_width(&mut self, width: f32) -> bool {
        self.size.x = width.max(0.0);
        width < 0.0
    }

    /// Resize vertically around the pivot. Returns `true` if `height` was
    /// negative and had to be clamped.
    pub fn set_height(&mut self, height: f32) -> bool {
        self.size.y = height.max(0.0);
        height < 0.0
    }

    /// Shift the rectangle along the time axis only.
    #[inline]
    pub fn translate_x(&mut self, dx: f32) {
        self.position.x += dx;
    }

    /// Apply a size and position change, flooring size at zero.
    ///
    /// Callers are expected to have clamped `size` already; the floor here
    /// only guards the invariant against float noise.
    pub(crate) fn offset(&mut self, size: Vec2, position: Vec2) {
        self.size = (self.size + size).max(Vec2::ZERO);
        self.position += position;
    }
}

impl Default for AnchoredRect {
    fn default() -> Self {
        Self::new(Vec2::ZERO, Vec2::ZERO, Vec2::ZERO)
    }
}
