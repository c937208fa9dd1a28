//! Drag handle hit testing for timeline clips.

use cliplane_core::{Rect, ResizeEdge, Vec2};

/// Part of a clip a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragEdge {
    Left,
    Right,
    Top,
    Bottom,
    /// Anywhere inside the clip that is not an edge handle.
    Body,
}

impl DragEdge {
    /// The resize this handle drives, or `None` for the body.
    pub fn resize_edge(self) -> Option<ResizeEdge> {
        match self {
            DragEdge::Left => Some(ResizeEdge::Left),
            DragEdge::Right => Some(ResizeEdge::Right),
            DragEdge::Top => Some(ResizeEdge::Top),
            DragEdge::Bottom => Some(ResizeEdge::Bottom),
            DragEdge::Body => None,
        }
    }
}

impl From<ResizeEdge> for DragEdge {
    fn from(edge: ResizeEdge) -> Self {
        match edge {
            ResizeEdge::Left => DragEdge::Left,
            ResizeEdge::Right => DragEdge::Right,
            ResizeEdge::Top => DragEdge::Top,
            ResizeEdge::Bottom => DragEdge::Bottom,
        }
    }
}

/// Hit test a screen position against a clip's handles.
///
/// Left/right strips win over top/bottom strips where they overlap at the
/// corners, since trimming time is the more common gesture. Returns `None`
/// outside the clip.
pub fn hit_test(clip_rect: Rect, pos: Vec2, handle_width: f32) -> Option<DragEdge> {
    if !clip_rect.contains(pos) {
        return None;
    }

    // Keep handles from swallowing the whole body on tiny clips.
    let hw = handle_width.min(clip_rect.width / 3.0);
    let hh = handle_width.min(clip_rect.height / 3.0);

    if pos.x < clip_rect.left() + hw {
        return Some(DragEdge::Left);
    }
    if pos.x > clip_rect.right() - hw {
        return Some(DragEdge::Right);
    }
    if pos.y > clip_rect.top() - hh {
        return Some(DragEdge::Top);
    }
    if pos.y < clip_rect.bottom() + hh {
        return Some(DragEdge::Bottom);
    }

    Some(DragEdge::Body)
}
