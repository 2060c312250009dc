use std::path::Path;

use anyhow::Context as _;

use crate::{
    animation::driver::MorphDriver,
    bake::timeline::DrivenTimeline,
    camera::MorphCamera,
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{MorphError, MorphResult},
    },
    rig::{state::MorphState, waypoint::MorphList},
    scene::store::Scene,
};

/// JSON rig document: a scene, the morph list over it, the live morph state,
/// an optional morph driver and the frame range to bake.
///
/// ```json
/// {
///   "scene": {
///     "cameras": { "wide": { "position": [0, -10, 2], "orientation": [0, 0, 0, 1], ... } },
///     "objects": { "subject": [0, 0, 1] }
///   },
///   "waypoints": ["wide", null, "close"],
///   "state": { "morph_value": 0.5, "arc_control": 0.25 },
///   "driver": { "keys": [{ "frame": 1, "value": 0.0 }, { "frame": 48, "value": 2.0 }] },
///   "frames": { "start": 1, "end": 48 },
///   "current_frame": 1
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RigFile {
    #[serde(default)]
    pub scene: Scene,
    #[serde(default)]
    pub waypoints: MorphList,
    #[serde(default)]
    pub state: MorphState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<MorphDriver>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frames: Option<FrameRange>,
    #[serde(default)]
    pub current_frame: FrameIndex,
}

impl RigFile {
    /// Parse and validate. The morph state is clamped to the list.
    pub fn from_json_str(s: &str) -> MorphResult<Self> {
        let mut rig: Self = serde_json::from_str(s)?;
        rig.validate()?;
        rig.state.reclamp(rig.waypoints.len());
        Ok(rig)
    }

    pub fn load(path: &Path) -> MorphResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read rig '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn to_json_pretty(&self) -> MorphResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> MorphResult<()> {
        self.scene.validate()?;
        for (i, w) in self.waypoints.iter().enumerate() {
            let Some(name) = w.camera.as_deref() else {
                continue;
            };
            if self.scene.camera(name).is_none() {
                return Err(MorphError::validation(format!(
                    "waypoint {i} references unknown camera '{name}'"
                )));
            }
        }
        if let Some(driver) = &self.driver {
            driver.validate()?;
        }
        if let Some(frames) = self.frames {
            FrameRange::new(frames.start, frames.end)?;
        }
        Ok(())
    }

    /// Bake range: the document's `frames`, or just the current frame.
    pub fn frame_range(&self) -> FrameRange {
        self.frames.unwrap_or(FrameRange {
            start: self.current_frame,
            end: self.current_frame,
        })
    }

    pub fn timeline(&self) -> DrivenTimeline {
        DrivenTimeline::new(self.current_frame, self.driver.clone())
    }

    pub fn morph_camera(&self) -> MorphCamera {
        MorphCamera::new(self.waypoints.clone(), self.state)
    }
}

#[cfg(test)]
#[path = "../tests/unit/rig/rig_file.rs"]
mod tests;
