//! Cliplane Core - Foundation types for the timeline clip widget
//!
//! This crate provides the fundamental types used throughout Cliplane:
//! - Error type shared by every crate
//! - Geometric primitives (Rect, Transform2D, AnchoredRect)
//! - Edge-resize math for dragging clip handles

pub mod error;
pub mod geometry;
pub mod resize;

pub use error::{ClipError, Result};
pub use geometry::{AnchoredRect, Rect, Transform2D, Vec2};
pub use resize::{apply_resize, resize_delta, Axis, BoundsDelta, ResizeEdge, ResizeOutcome};
