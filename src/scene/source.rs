use crate::{
    foundation::core::DVec3,
    rig::{pose::CameraPose, waypoint::Waypoint},
};

/// Host-side provider of reference camera poses.
///
/// Implementations return the current, fully evaluated world-space snapshot.
/// Anything that cannot be resolved (empty slot, deleted object, object that
/// is not a camera) is reported as `None`; the engine degrades gracefully.
pub trait CameraPoseSource {
    /// Pose of the camera bound to `waypoint`.
    fn resolve(&self, waypoint: &Waypoint) -> Option<CameraPose>;

    /// World position of the object `pose` focuses on, if it has one and it resolves.
    fn resolve_focus_target(&self, pose: &CameraPose) -> Option<DVec3>;
}

impl<S: CameraPoseSource + ?Sized> CameraPoseSource for &S {
    fn resolve(&self, waypoint: &Waypoint) -> Option<CameraPose> {
        (**self).resolve(waypoint)
    }

    fn resolve_focus_target(&self, pose: &CameraPose) -> Option<DVec3> {
        (**self).resolve_focus_target(pose)
    }
}
