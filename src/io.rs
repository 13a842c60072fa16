use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::Result;
use crate::frame::{Attachment, HitResult};
use crate::types::{CameraPose, SurfaceAnchorId};

/// Serializes an object to a pretty JSON file.
pub fn object_to_json<T: Serialize, P: AsRef<Path>>(output_path: P, object: &T) -> Result<()> {
    let j = serde_json::to_string_pretty(object)?;
    std::fs::write(output_path, j)?;
    Ok(())
}

/// Deserializes an object from a JSON file.
pub fn object_from_json<T: DeserializeOwned, P: AsRef<Path>>(file_path: P) -> Result<T> {
    let contents = std::fs::read_to_string(file_path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// One recorded rendering tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayFrame {
    #[serde(default)]
    pub object_visible: bool,
    #[serde(default)]
    pub hit: Option<HitResult>,
    #[serde(default)]
    pub camera: Option<CameraPose>,
}

pub fn load_replay<P: AsRef<Path>>(file_path: P) -> Result<Vec<ReplayFrame>> {
    let frames: Vec<ReplayFrame> = object_from_json(file_path)?;
    log::debug!("loaded {} replay frames", frames.len());
    Ok(frames)
}

/// Indicator output after one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    pub frame: usize,
    pub state: String,
    /// `None` until the indicator has been placed once.
    pub display_position: Option<Vec3>,
    pub opacity: f32,
    pub pulsing: Option<bool>,
    pub attachment: Attachment,
    pub visited_surfaces: Vec<SurfaceAnchorId>,
}

pub fn write_trace<P: AsRef<Path>>(output_path: P, entries: &[TraceEntry]) -> Result<()> {
    object_to_json(output_path, &entries)
}
