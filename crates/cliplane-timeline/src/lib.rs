//! Cliplane Timeline - Clip and track model
//!
//! Implements the data side of the clip widget:
//! - Clips with anchored bounds and an owning track
//! - Tracks holding clip references
//! - A lane stack that accepts clips dragged in from other tracks

pub mod clip;
pub mod layers;
pub mod track;

pub use clip::{Clip, ClipData, ClipId};
pub use layers::{ClipHandoff, LayerStack};
pub use track::{ClipOwner, Track, TrackId, TrackKind, DEFAULT_TRACK_HEIGHT};
