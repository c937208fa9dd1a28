//! Track types for the timeline.

use std::fmt;

use cliplane_core::{AnchoredRect, Vec2};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::clip::{Clip, ClipData, ClipId};

/// Default lane height in timeline units.
pub const DEFAULT_TRACK_HEIGHT: f32 = 36.0;

/// Unique identifier of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(pub Uuid);

impl TrackId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TrackId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Kind of track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackKind {
    Video,
    Audio,
}

/// The side of a track that a clip talks to when it is destroyed.
pub trait ClipOwner {
    /// The owning track's id.
    fn id(&self) -> TrackId;

    /// Forget `clip`. Returns `false` if this owner did not hold it.
    fn remove_clip(&mut self, clip: ClipId) -> bool;
}

/// A lane holding references to the clips placed on it, in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Unique track ID
    pub id: TrackId,
    /// Track name
    pub name: String,
    /// Track kind
    pub kind: TrackKind,
    /// Lane height; new clips fill it
    pub height: f32,
    /// Is track locked (refuses dropped clips)
    pub locked: bool,
    clips: Vec<ClipId>,
}

impl Track {
    fn new(name: impl Into<String>, kind: TrackKind) -> Self {
        Self {
            id: TrackId::new(),
            name: name.into(),
            kind,
            height: DEFAULT_TRACK_HEIGHT,
            locked: false,
            clips: Vec::new(),
        }
    }

    /// Create a new video track.
    pub fn new_video(name: impl Into<String>) -> Self {
        Self::new(name, TrackKind::Video)
    }

    /// Create a new audio track.
    pub fn new_audio(name: impl Into<String>) -> Self {
        Self::new(name, TrackKind::Audio)
    }

    /// Place a new clip whose left edge sits at `start`.
    pub fn create_clip(&mut self, data: ClipData, start: f32) -> Clip {
        self.create_clip_with_pivot(data, start, Clip::DEFAULT_PIVOT)
    }

    /// Place a new clip with an explicit pivot. The clip fills the lane
    /// vertically and is as wide as `data.duration`.
    pub fn create_clip_with_pivot(&mut self, data: ClipData, start: f32, pivot: Vec2) -> Clip {
        let size = Vec2::new(data.duration.max(0.0), self.height);
        let bounds = AnchoredRect::new(start_position(start, size, pivot), size, pivot);
        let clip = Clip::new(self.id, data, bounds);
        self.clips.push(clip.id());
        debug!(track = %self.id, clip = %clip.id(), start, "clip created");
        clip
    }

    /// Whether a dropped clip carrying `data` may land here: the lane is
    /// unlocked and of the clip's kind.
    pub fn accepts(&self, data: &ClipData) -> bool {
        !self.locked && self.kind == data.kind
    }

    /// Ids of the clips on this track, in insertion order.
    pub fn clip_ids(&self) -> &[ClipId] {
        &self.clips
    }

    pub fn contains(&self, clip: ClipId) -> bool {
        self.clips.contains(&clip)
    }

    /// Number of clips in this track.
    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }
}

impl ClipOwner for Track {
    fn id(&self) -> TrackId {
        self.id
    }

    fn remove_clip(&mut self, clip: ClipId) -> bool {
        match self.clips.iter().position(|id| *id == clip) {
            Some(index) => {
                self.clips.remove(index);
                debug!(track = %self.id, %clip, "clip removed from track");
                true
            }
            None => false,
        }
    }
}

fn start_position(start: f32, size: Vec2, pivot: Vec2) -> Vec2 {
    Vec2::new(start + pivot.x * size.x, pivot.y * size.y)
}
