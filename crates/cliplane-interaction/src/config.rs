//! Drag tuning parameters and their versioned JSON file.

use std::path::Path;

use cliplane_core::{ClipError, Result};
use serde::{Deserialize, Serialize};

/// Current schema version.
pub const CURRENT_VERSION: u32 = 1;

/// Tuning for clip drag gestures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Vertical pointer offset, as a fraction of clip height, past which a
    /// move turns into a track change.
    pub reassign_threshold_ratio: f32,
    /// Width of the edge handles in screen units.
    pub handle_width: f32,
    /// Smallest width/height an edge drag may shrink a clip to.
    pub min_size: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            reassign_threshold_ratio: 0.4,
            handle_width: 6.0,
            min_size: 0.0,
        }
    }
}

impl DragConfig {
    /// Check every field is usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.reassign_threshold_ratio.is_finite() && self.reassign_threshold_ratio > 0.0) {
            return Err(ClipError::Configuration(format!(
                "reassign_threshold_ratio must be positive, got {}",
                self.reassign_threshold_ratio
            )));
        }
        if !(self.handle_width.is_finite() && self.handle_width >= 0.0) {
            return Err(ClipError::Configuration(format!(
                "handle_width must be non-negative, got {}",
                self.handle_width
            )));
        }
        if !(self.min_size.is_finite() && self.min_size >= 0.0) {
            return Err(ClipError::Configuration(format!(
                "min_size must be non-negative, got {}",
                self.min_size
            )));
        }
        Ok(())
    }

    /// Vertical distance a move must exceed on a clip of `clip_height`.
    #[inline]
    pub fn reassign_threshold(&self, clip_height: f32) -> f32 {
        self.reassign_threshold_ratio * clip_height
    }
}

/// Versioned config file wrapper.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Schema version for migration.
    pub version: u32,
    /// Drag settings.
    pub drag: DragConfig,
}

impl ConfigFile {
    pub fn new(drag: DragConfig) -> Self {
        Self {
            version: CURRENT_VERSION,
            drag,
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self)
            .map_err(|e| ClipError::Serialization(format!("cannot encode drag config: {e}")))
    }

    /// Parse JSON written by any known schema version, bring it up to date
    /// and validate the drag settings.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let raw: serde_json::Value = serde_json::from_slice(data)
            .map_err(|e| ClipError::Serialization(format!("drag config is not JSON: {e}")))?;

        let version = schema_version(&raw)?;
        let file: Self = serde_json::from_value(migrate(raw, version)?)
            .map_err(|e| ClipError::Serialization(format!("malformed drag config: {e}")))?;
        file.drag.validate()?;
        Ok(file)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        Self::from_json(&std::fs::read(path)?)
    }
}

/// Schema version stored in `raw`. Files without one predate versioning.
fn schema_version(raw: &serde_json::Value) -> Result<u32> {
    let Some(field) = raw.get("version") else {
        return Ok(0);
    };
    let version = field
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| ClipError::Serialization(format!("unreadable config version {field}")))?;
    if version > CURRENT_VERSION {
        return Err(ClipError::Serialization(format!(
            "config version {version} is newer than supported version {CURRENT_VERSION}"
        )));
    }
    Ok(version)
}

/// Step `data` forward one schema version at a time.
fn migrate(mut data: serde_json::Value, from_version: u32) -> Result<serde_json::Value> {
    for version in from_version..CURRENT_VERSION {
        data = match version {
            0 if data.get("drag").is_some() => {
                data["version"] = 1.into();
                data
            }
            // v0 was a bare DragConfig object
            0 => serde_json::json!({ "version": 1, "drag": data }),
            _ => {
                return Err(ClipError::Serialization(format!(
                    "no migration from config version {version}"
                )))
            }
        };
    }
    Ok(data)
}
