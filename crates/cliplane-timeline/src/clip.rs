//! Clip types for the timeline.

use std::fmt;

use cliplane_core::{apply_resize, AnchoredRect, ClipError, ResizeEdge, ResizeOutcome, Result, Transform2D, Vec2};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::track::{ClipOwner, TrackId, TrackKind};

/// Unique identifier of a clip on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClipId(pub Uuid);

impl ClipId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClipId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Payload carried by a clip: what it plays and for how long.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipData {
    /// Clip name (displayed in UI)
    pub name: String,
    /// Duration on the timeline, in timeline units
    pub duration: f32,
    /// Kind of track this clip belongs on
    pub kind: TrackKind,
    /// Path to the source media, if any
    pub source: Option<String>,
    /// Source in frame
    pub start_frame: i64,
    /// Source out frame (exclusive)
    pub end_frame: i64,
}

impl ClipData {
    /// Create a video clip payload with no source media.
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            duration,
            kind: TrackKind::Video,
            source: None,
            start_frame: 0,
            end_frame: 0,
        }
    }

    /// Attach source media and its frame range.
    pub fn with_source(mut self, path: impl Into<String>, start_frame: i64, end_frame: i64) -> Self {
        self.source = Some(path.into());
        self.start_frame = start_frame;
        self.end_frame = end_frame;
        self
    }

    pub fn with_kind(mut self, kind: TrackKind) -> Self {
        self.kind = kind;
        self
    }

    /// Number of source frames covered by this clip.
    pub fn frame_count(&self) -> i64 {
        (self.end_frame - self.start_frame).max(0)
    }
}

/// A clip on a track.
///
/// Bounds live in the owning track's lane space: x is time, y is the
/// secondary visual extent with the lane bottom at 0. A clip can only be
/// created through [`Track`](crate::Track), so it always has an owner.
#[derive(Debug)]
pub struct Clip {
    id: ClipId,
    data: ClipData,
    bounds: AnchoredRect,
    owner: TrackId,
}

impl Clip {
    /// Pivot used when a track does not ask for another one.
    pub const DEFAULT_PIVOT: Vec2 = Vec2::new(0.5, 0.5);

    pub(crate) fn new(owner: TrackId, data: ClipData, bounds: AnchoredRect) -> Self {
        let duration = data.duration;
        let mut clip = Self {
            id: ClipId::new(),
            data,
            bounds,
            owner,
        };
        clip.set_width(duration);
        clip
    }

    pub fn id(&self) -> ClipId {
        self.id
    }

    /// Track this clip belongs to.
    pub fn owner(&self) -> TrackId {
        self.owner
    }

    /// The clip's payload.
    pub fn data(&self) -> &ClipData {
        &self.data
    }

    pub fn bounds(&self) -> &AnchoredRect {
        &self.bounds
    }

    pub fn width(&self) -> f32 {
        self.bounds.width()
    }

    pub fn height(&self) -> f32 {
        self.bounds.height()
    }

    /// Time of the clip's left edge.
    pub fn start(&self) -> f32 {
        self.bounds.left()
    }

    /// Time of the clip's right edge.
    pub fn end(&self) -> f32 {
        self.bounds.right()
    }

    /// Replace the payload and size the clip to its duration.
    pub fn set_clip(&mut self, data: ClipData) {
        let duration = data.duration;
        self.data = data;
        self.set_width(duration);
    }

    pub fn set_width(&mut self, width: f32) {
        if self.bounds.set_width(width) {
            warn!(clip = %self.id, width, "negative clip width clamped to zero");
        }
    }

    pub fn set_height(&mut self, height: f32) {
        if self.bounds.set_height(height) {
            warn!(clip = %self.id, height, "negative clip height clamped to zero");
        }
    }

    /// Translate along the time axis only.
    pub fn move_position(&mut self, dx: f32) {
        self.bounds.translate_x(dx);
    }

    /// Drag one edge by `delta`, never shrinking below `min_size`.
    pub fn resize(&mut self, edge: ResizeEdge, delta: Vec2, min_size: f32) -> ResizeOutcome {
        let outcome = apply_resize(&mut self.bounds, edge, delta, min_size);
        if outcome.clamped {
            debug!(clip = %self.id, ?edge, "resize clamped at size floor");
        }
        outcome
    }

    /// Screen position of the pivot under the given lane-to-screen mapping.
    pub fn screen_anchor(&self, to_screen: Transform2D) -> Vec2 {
        to_screen.transform_point(self.bounds.position)
    }

    /// Destroy the clip, removing it from its owning track.
    ///
    /// `owner` must be the track this clip belongs to and must still hold it.
    /// Returns the payload so a caller can hand it on.
    pub fn dispose(self, owner: &mut dyn ClipOwner) -> Result<ClipData> {
        self.detach(owner)?;
        Ok(self.data)
    }

    /// Remove the clip from `owner` while keeping it alive.
    ///
    /// On error the track is left untouched and the clip is still whole, so
    /// a caller can detach first and tear down anything else afterwards.
    pub fn detach(&self, owner: &mut dyn ClipOwner) -> Result<()> {
        if owner.id() != self.owner {
            return Err(ClipError::Lifecycle(format!(
                "clip {} belongs to track {}, not {}",
                self.id,
                self.owner,
                owner.id()
            )));
        }
        if !owner.remove_clip(self.id) {
            return Err(ClipError::Lifecycle(format!(
                "track {} does not hold clip {}",
                self.owner, self.id
            )));
        }
        debug!(clip = %self.id, track = %self.owner, "clip disposed");
        Ok(())
    }

    /// Consume an already detached clip and keep its payload.
    pub fn into_data(self) -> ClipData {
        self.data
    }
}
