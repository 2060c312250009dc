use crate::{rig::pose::CameraPose, scene::source::CameraPoseSource};

/// Effective focus distance of `pose`.
///
/// With depth of field on and a focus target set, this is the distance from
/// the camera to the target. A target that cannot be resolved falls back to
/// the explicit `focus_distance`, as does every other case.
pub fn resolve_focus_distance<S>(pose: &CameraPose, source: &S) -> f64
where
    S: CameraPoseSource + ?Sized,
{
    if !pose.dof_enabled {
        return pose.focus_distance;
    }
    let Some(focus_target) = pose.focus_target.as_deref() else {
        return pose.focus_distance;
    };

    match source.resolve_focus_target(pose) {
        Some(p) => pose.position.distance(p),
        None => {
            tracing::warn!(
                focus_target,
                fallback = pose.focus_distance,
                "focus target unavailable, using explicit focus distance"
            );
            pose.focus_distance
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/focus.rs"]
mod tests;
