use crate::{
    foundation::{
        core::{DQuat, DVec3, FrameIndex},
        math::{euler_xyz_to_quat, quat_to_euler_xyz, unwrap_euler},
    },
    rig::pose::CameraPose,
};

/// One baked sample.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BakedKeyframe {
    pub frame: FrameIndex,
    pub pose: CameraPose,
    /// XYZ Euler angles (radians) of `pose.orientation`, continuous with the
    /// previous keyframe.
    pub rotation_euler: DVec3,
}

impl BakedKeyframe {
    /// Rotation rebuilt from `rotation_euler`; the same rotation as
    /// `pose.orientation`, possibly with the opposite sign.
    pub fn euler_orientation(&self) -> DQuat {
        euler_xyz_to_quat(self.rotation_euler)
    }
}

/// Per-frame pose track produced by one bake, in ascending frame order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BakedTrack {
    pub keyframes: Vec<BakedKeyframe>,
    /// Frames inside the range that produced no pose.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<FrameIndex>,
}

impl BakedTrack {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            keyframes: Vec::with_capacity(n),
            skipped: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BakedKeyframe> {
        self.keyframes.iter()
    }

    pub fn frames(&self) -> impl Iterator<Item = FrameIndex> + '_ {
        self.keyframes.iter().map(|k| k.frame)
    }

    pub fn get(&self, frame: FrameIndex) -> Option<&BakedKeyframe> {
        self.keyframes
            .binary_search_by_key(&frame, |k| k.frame)
            .ok()
            .map(|i| &self.keyframes[i])
    }

    /// Append a sample. Frames must be pushed in ascending order.
    pub(crate) fn push(&mut self, frame: FrameIndex, pose: CameraPose, unwrap: bool) {
        debug_assert!(self.keyframes.last().is_none_or(|k| k.frame < frame));
        let euler = quat_to_euler_xyz(pose.orientation);
        let rotation_euler = match self.keyframes.last() {
            Some(prev) if unwrap => unwrap_euler(prev.rotation_euler, euler),
            _ => euler,
        };
        self.keyframes.push(BakedKeyframe {
            frame,
            pose,
            rotation_euler,
        });
    }

    pub(crate) fn skip(&mut self, frame: FrameIndex) {
        self.skipped.push(frame);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bake/track.rs"]
mod tests;
