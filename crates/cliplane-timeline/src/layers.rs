//! Vertical stack of track lanes and cross-track drop handling.
//!
//! Lanes are laid out top to bottom starting at `origin` (the screen
//! position of the top lane's top-left corner). Screen space is y-up, so
//! each following lane sits below the previous one.

use cliplane_core::{ClipError, Result, Transform2D, Vec2};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::clip::{Clip, ClipData};
use crate::track::{Track, TrackId};

/// What a finished cross-track drag hands to the destination side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipHandoff {
    /// Payload of the clip that was dragged away.
    pub data: ClipData,
    /// Track the clip was removed from.
    pub source_track: TrackId,
    /// Screen position of the pointer on release.
    pub drop_position: Vec2,
    /// Distance in timeline units from the clip's left edge to the pointer
    /// when the drag left the source lane.
    pub grab_offset: f32,
}

/// Ordered set of tracks plus their placement on screen.
#[derive(Debug, Clone)]
pub struct LayerStack {
    tracks: Vec<Track>,
    origin: Vec2,
    zoom: f32,
}

impl LayerStack {
    /// `zoom` is screen units per timeline unit along the time axis.
    pub fn new(origin: Vec2, zoom: f32) -> Self {
        Self {
            tracks: Vec::new(),
            origin,
            zoom,
        }
    }

    /// Append a track below the existing ones.
    pub fn push_track(&mut self, track: Track) -> TrackId {
        let id = track.id;
        self.tracks.push(track);
        id
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn track_mut(&mut self, id: TrackId) -> Option<&mut Track> {
        self.tracks.iter_mut().find(|t| t.id == id)
    }

    pub fn track_index(&self, id: TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    /// Screen y of the bottom of lane `index`.
    pub fn lane_bottom(&self, index: usize) -> Option<f32> {
        if index >= self.tracks.len() {
            return None;
        }
        let stacked: f32 = self.tracks[..=index].iter().map(|t| t.height).sum();
        Some(self.origin.y - stacked)
    }

    /// Mapping from lane space (time, lane-local y) to screen space.
    pub fn lane_transform(&self, index: usize) -> Option<Transform2D> {
        let bottom = self.lane_bottom(index)?;
        Some(Transform2D::from_scale_translation(
            Vec2::new(self.zoom, 1.0),
            Vec2::new(self.origin.x, bottom),
        ))
    }

    /// Lane under a screen-space y coordinate.
    pub fn track_index_at(&self, screen_y: f32) -> Option<usize> {
        let mut top = self.origin.y;
        for (index, track) in self.tracks.iter().enumerate() {
            let bottom = top - track.height;
            if screen_y <= top && screen_y >= bottom {
                return Some(index);
            }
            top = bottom;
        }
        None
    }

    /// Insert the dragged clip into the lane under the drop point.
    ///
    /// Drops outside every lane, onto a locked lane, or onto a lane of the
    /// wrong kind go back to the source track. The new clip keeps the pointer's grab offset so it lands
    /// where the proxy was shown.
    pub fn accept_handoff(&mut self, handoff: ClipHandoff) -> Result<Clip> {
        let target = self
            .track_index_at(handoff.drop_position.y)
            .filter(|&i| self.tracks[i].accepts(&handoff.data))
            .or_else(|| self.track_index(handoff.source_track))
            .ok_or_else(|| {
                ClipError::NotFound(format!(
                    "no lane at y={} and source track {} is gone",
                    handoff.drop_position.y, handoff.source_track
                ))
            })?;

        let to_lane = self
            .lane_transform(target)
            .ok_or_else(|| ClipError::NotFound(format!("lane {target}")))?
            .inverse();
        let local = to_lane.transform_point(handoff.drop_position);
        let start = (local.x - handoff.grab_offset).max(0.0);

        let track = &mut self.tracks[target];
        info!(
            clip = %handoff.data.name,
            from = %handoff.source_track,
            to = %track.id,
            start,
            "clip dropped on track"
        );
        Ok(track.create_clip(handoff.data, start))
    }
}
