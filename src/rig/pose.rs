use crate::foundation::{
    core::{DQuat, DVec3},
    error::{MorphError, MorphResult},
};

/// How the sensor size maps onto the render aspect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SensorFit {
    #[default]
    Auto,
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sensor {
    pub fit: SensorFit,
    pub width: f64,  // mm
    pub height: f64, // mm
}

impl Default for Sensor {
    fn default() -> Self {
        Self {
            fit: SensorFit::Auto,
            width: 36.0,
            height: 24.0,
        }
    }
}

/// Snapshot of a camera's world-space pose and lens at one evaluation instant.
///
/// `focus_target` names a scene object whose distance overrides
/// `focus_distance` while depth of field is enabled. Poses produced by the
/// evaluator always carry the resolved distance and no target.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CameraPose {
    pub position: DVec3,
    pub orientation: DQuat, // unit length
    pub focal_length: f64,  // mm, > 0
    pub dof_enabled: bool,
    pub focus_distance: f64,    // >= 0
    pub aperture_fstop: f64,    // > 0
    pub aperture_blades: u32,   // below 3 the aperture is round
    pub aperture_ratio: f64,    // anamorphic bokeh ratio, > 0
    pub aperture_rotation: f64, // radians
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_target: Option<String>,
    pub clip_start: f64,
    pub clip_end: f64,
    pub sensor: Sensor,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            orientation: DQuat::IDENTITY,
            focal_length: 50.0,
            dof_enabled: false,
            focus_distance: 10.0,
            aperture_fstop: 2.8,
            aperture_blades: 0,
            aperture_ratio: 1.0,
            aperture_rotation: 0.0,
            focus_target: None,
            clip_start: 0.1,
            clip_end: 1000.0,
            sensor: Sensor::default(),
        }
    }
}

impl CameraPose {
    pub const MAX_APERTURE_BLADES: u32 = 16;

    /// Default lens at the given world transform. The orientation is normalized.
    pub fn at(position: DVec3, orientation: DQuat) -> Self {
        Self {
            position,
            orientation: orientation.normalize(),
            ..Self::default()
        }
    }

    pub fn with_focal_length(mut self, focal_length: f64) -> Self {
        self.focal_length = focal_length;
        self
    }

    pub fn with_dof(mut self, focus_distance: f64, aperture_fstop: f64) -> Self {
        self.dof_enabled = true;
        self.focus_distance = focus_distance;
        self.aperture_fstop = aperture_fstop;
        self
    }

    /// Bokeh shape: blade count, anamorphic ratio and rotation in radians.
    pub fn with_aperture_shape(mut self, blades: u32, ratio: f64, rotation: f64) -> Self {
        self.aperture_blades = blades;
        self.aperture_ratio = ratio;
        self.aperture_rotation = rotation;
        self
    }

    pub fn with_focus_target(mut self, target: impl Into<String>) -> Self {
        self.focus_target = Some(target.into());
        self
    }

    pub fn validate(&self) -> MorphResult<()> {
        if !self.position.is_finite() {
            return Err(MorphError::validation("camera position must be finite"));
        }
        if !self.orientation.is_finite() || !self.orientation.is_normalized() {
            return Err(MorphError::validation(
                "camera orientation must be a unit quaternion",
            ));
        }
        if !(self.focal_length.is_finite() && self.focal_length > 0.0) {
            return Err(MorphError::validation("focal_length must be > 0"));
        }
        if !(self.focus_distance.is_finite() && self.focus_distance >= 0.0) {
            return Err(MorphError::validation("focus_distance must be >= 0"));
        }
        if !(self.aperture_fstop.is_finite() && self.aperture_fstop > 0.0) {
            return Err(MorphError::validation("aperture_fstop must be > 0"));
        }
        if self.aperture_blades > Self::MAX_APERTURE_BLADES {
            return Err(MorphError::validation(format!(
                "aperture_blades must be <= {}",
                Self::MAX_APERTURE_BLADES
            )));
        }
        if !(self.aperture_ratio.is_finite() && self.aperture_ratio > 0.0) {
            return Err(MorphError::validation("aperture_ratio must be > 0"));
        }
        if !self.aperture_rotation.is_finite() {
            return Err(MorphError::validation("aperture_rotation must be finite"));
        }
        if !(self.clip_start > 0.0 && self.clip_end > self.clip_start) {
            return Err(MorphError::validation(
                "clip range must satisfy 0 < clip_start < clip_end",
            ));
        }
        if !(self.sensor.width > 0.0 && self.sensor.height > 0.0) {
            return Err(MorphError::validation("sensor size must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rig/pose.rs"]
mod tests;
