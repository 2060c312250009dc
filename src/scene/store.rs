use std::collections::BTreeMap;

use crate::{
    foundation::{
        core::DVec3,
        error::{MorphError, MorphResult},
    },
    rig::{pose::CameraPose, waypoint::Waypoint},
    scene::source::CameraPoseSource,
};

/// In-memory scene: named reference cameras plus named objects usable as
/// focus targets.
///
/// Maps are ordered so serialized scenes are stable.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub cameras: BTreeMap<String, CameraPose>,
    #[serde(default)]
    pub objects: BTreeMap<String, DVec3>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_camera(&mut self, name: impl Into<String>, pose: CameraPose) -> &mut Self {
        self.cameras.insert(name.into(), pose);
        self
    }

    pub fn remove_camera(&mut self, name: &str) -> Option<CameraPose> {
        self.cameras.remove(name)
    }

    pub fn insert_object(&mut self, name: impl Into<String>, position: DVec3) -> &mut Self {
        self.objects.insert(name.into(), position);
        self
    }

    pub fn remove_object(&mut self, name: &str) -> Option<DVec3> {
        self.objects.remove(name)
    }

    pub fn camera(&self, name: &str) -> Option<&CameraPose> {
        self.cameras.get(name)
    }

    pub fn validate(&self) -> MorphResult<()> {
        for (name, pose) in &self.cameras {
            pose.validate()
                .map_err(|e| MorphError::validation(format!("camera '{name}': {e}")))?;
        }
        for (name, p) in &self.objects {
            if !p.is_finite() {
                return Err(MorphError::validation(format!(
                    "object '{name}' position must be finite"
                )));
            }
        }
        Ok(())
    }
}

impl CameraPoseSource for Scene {
    fn resolve(&self, waypoint: &Waypoint) -> Option<CameraPose> {
        let name = waypoint.camera.as_deref()?;
        let pose = self.cameras.get(name);
        if pose.is_none() {
            tracing::debug!(camera = name, "waypoint references an unknown camera");
        }
        pose.cloned()
    }

    fn resolve_focus_target(&self, pose: &CameraPose) -> Option<DVec3> {
        let target = pose.focus_target.as_deref()?;
        self.objects.get(target).copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/store.rs"]
mod tests;
