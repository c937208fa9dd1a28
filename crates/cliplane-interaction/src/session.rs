//! Per-gesture drag state.

use cliplane_core::{ResizeEdge, Vec2};

use crate::handles::DragEdge;

/// What the current gesture does to the clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragMode {
    ResizeLeft,
    ResizeRight,
    ResizeTop,
    ResizeBottom,
    Move,
}

impl DragMode {
    pub fn resize_edge(self) -> Option<ResizeEdge> {
        match self {
            DragMode::ResizeLeft => Some(ResizeEdge::Left),
            DragMode::ResizeRight => Some(ResizeEdge::Right),
            DragMode::ResizeTop => Some(ResizeEdge::Top),
            DragMode::ResizeBottom => Some(ResizeEdge::Bottom),
            DragMode::Move => None,
        }
    }

    /// The handle that drives this mode.
    pub fn edge(self) -> DragEdge {
        match self.resize_edge() {
            Some(edge) => edge.into(),
            None => DragEdge::Body,
        }
    }
}

impl From<DragEdge> for DragMode {
    fn from(edge: DragEdge) -> Self {
        match edge {
            DragEdge::Left => DragMode::ResizeLeft,
            DragEdge::Right => DragMode::ResizeRight,
            DragEdge::Top => DragMode::ResizeTop,
            DragEdge::Bottom => DragMode::ResizeBottom,
            DragEdge::Body => DragMode::Move,
        }
    }
}

/// Observable state of a clip widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Resizing(ResizeEdge),
    Moving,
}

/// A single pointer gesture, from pointer-down to pointer-up.
///
/// Owned by the widget that started it; the proxy it holds is the only
/// cross-track state a gesture has.
#[derive(Debug)]
pub struct DragSession<P> {
    mode: DragMode,
    pub(crate) active_proxy: Option<P>,
    /// Timeline distance from the clip's left edge to the pointer when the
    /// proxy was spawned.
    pub(crate) grab_offset: f32,
    /// Sum of pointer deltas seen so far, in screen units.
    pub(crate) travelled: Vec2,
}

impl<P> DragSession<P> {
    pub fn new(mode: DragMode) -> Self {
        Self {
            mode,
            active_proxy: None,
            grab_offset: 0.0,
            travelled: Vec2::ZERO,
        }
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    pub fn has_proxy(&self) -> bool {
        self.active_proxy.is_some()
    }

    pub fn proxy(&self) -> Option<&P> {
        self.active_proxy.as_ref()
    }

    pub fn travelled(&self) -> Vec2 {
        self.travelled
    }

    pub fn state(&self) -> DragState {
        match self.mode.resize_edge() {
            Some(edge) => DragState::Resizing(edge),
            None => DragState::Moving,
        }
    }
}
