//! Edge-resize math for anchored rectangles.
//!
//! Every function here is pure: given the edge being dragged, the pointer
//! delta and the rectangle's pivot, it computes how size and position change
//! so the opposite edge stays where it was.
//!
//! Dragging an edge past its opposite edge clamps the size at the floor
//! instead of inverting the rectangle. Position compensation always uses the
//! clamped difference.

use serde::{Deserialize, Serialize};

use crate::geometry::{AnchoredRect, Vec2};

/// Axis a resize operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Time axis (x, width).
    Horizontal,
    /// Secondary visual extent (y, height).
    Vertical,
}

/// Which edge of a rectangle is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeEdge {
    Left,
    Right,
    Top,
    Bottom,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 4] = [
        ResizeEdge::Left,
        ResizeEdge::Right,
        ResizeEdge::Top,
        ResizeEdge::Bottom,
    ];

    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            ResizeEdge::Left | ResizeEdge::Right => Axis::Horizontal,
            ResizeEdge::Top | ResizeEdge::Bottom => Axis::Vertical,
        }
    }

    /// `-1` for edges that grow against the axis (Left, Bottom), `+1` otherwise.
    #[inline]
    pub fn multiplier(self) -> f32 {
        match self {
            ResizeEdge::Left | ResizeEdge::Bottom => -1.0,
            ResizeEdge::Right | ResizeEdge::Top => 1.0,
        }
    }

    /// Raw pointer movement along this edge's axis, unsigned by edge.
    #[inline]
    pub fn axis_delta(self, delta: Vec2) -> f32 {
        match self.axis() {
            Axis::Horizontal => delta.x,
            Axis::Vertical => delta.y,
        }
    }

    /// Pivot fraction measured from the edge that stays fixed.
    #[inline]
    fn pivot_from_fixed_edge(self, pivot: Vec2) -> f32 {
        match self {
            ResizeEdge::Right => pivot.x,
            ResizeEdge::Left => 1.0 - pivot.x,
            ResizeEdge::Top => pivot.y,
            ResizeEdge::Bottom => 1.0 - pivot.y,
        }
    }
}

/// Change to apply to an anchored rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundsDelta {
    pub size: Vec2,
    pub position: Vec2,
}

/// Result of applying a resize to a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeOutcome {
    /// The change that was actually applied.
    pub applied: BoundsDelta,
    /// True if the size floor cut the requested change short.
    pub clamped: bool,
}

fn axis_vec(axis: Axis, value: f32) -> Vec2 {
    match axis {
        Axis::Horizontal => Vec2::new(value, 0.0),
        Axis::Vertical => Vec2::new(0.0, value),
    }
}

/// Size change requested by dragging `edge` by `delta`, before clamping.
#[inline]
pub fn size_difference(edge: ResizeEdge, delta: Vec2) -> f32 {
    edge.multiplier() * edge.axis_delta(delta)
}

/// Bounds change for a size `difference` along `edge`'s axis.
///
/// Position moves by `multiplier * pivot * difference`, with the pivot
/// measured from the fixed edge. That keeps the fixed edge in place for any
/// pivot.
pub fn compensate(edge: ResizeEdge, difference: f32, pivot: Vec2) -> BoundsDelta {
    let shift = edge.multiplier() * edge.pivot_from_fixed_edge(pivot) * difference;
    BoundsDelta {
        size: axis_vec(edge.axis(), difference),
        position: axis_vec(edge.axis(), shift),
    }
}

/// Unclamped bounds change for dragging `edge` by `delta`.
pub fn resize_delta(edge: ResizeEdge, delta: Vec2, pivot: Vec2) -> BoundsDelta {
    compensate(edge, size_difference(edge, delta), pivot)
}

/// Clamp a size `difference` so that `current + difference` does not drop
/// below `floor`.
///
/// A rectangle that is already smaller than `floor` is not grown by a
/// shrinking drag; it simply stops shrinking.
pub fn clamp_difference(current: f32, difference: f32, floor: f32) -> f32 {
    let floor = floor.max(0.0).min(current);
    if current + difference >= floor {
        difference
    } else {
        floor - current
    }
}

/// Drag `edge` of `bounds` by `delta`, keeping the opposite edge fixed and
/// the size at or above `min_size`.
pub fn apply_resize(
    bounds: &mut AnchoredRect,
    edge: ResizeEdge,
    delta: Vec2,
    min_size: f32,
) -> ResizeOutcome {
    let requested = size_difference(edge, delta);
    let current = match edge.axis() {
        Axis::Horizontal => bounds.width(),
        Axis::Vertical => bounds.height(),
    };
    let difference = clamp_difference(current, requested, min_size);
    let applied = compensate(edge, difference, bounds.pivot());
    bounds.offset(applied.size, applied.position);

    ResizeOutcome {
        applied,
        clamped: difference != requested,
    }
}
