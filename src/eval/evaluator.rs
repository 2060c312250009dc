use crate::{
    eval::{arc::arc_position, focus::resolve_focus_distance, guard::ReentrancyGuard},
    foundation::{
        core::DQuat,
        math::{lerp_count, lerp_f64},
    },
    rig::{
        pose::{CameraPose, Sensor},
        state::{MorphState, clamp_morph_value},
        waypoint::MorphList,
    },
    scene::source::CameraPoseSource,
};

/// Segment `[index, index + 1]` of the morph list and the position inside it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Segment {
    pub index: usize,
    pub local_t: f64, // 0..=1
}

/// Pick the segment for `morph_value` in a list of `waypoint_count` waypoints.
///
/// The value is clamped to `[0, N-1]` first. The last waypoint maps to
/// `(N-2, 1.0)`, every other integer `i` to `(i, 0.0)`. `None` when N < 2.
pub fn select_segment(morph_value: f64, waypoint_count: usize) -> Option<Segment> {
    if waypoint_count < 2 {
        return None;
    }
    let v = clamp_morph_value(morph_value, waypoint_count);
    let index = (v.floor() as usize).min(waypoint_count - 2);
    Some(Segment {
        index,
        local_t: v - index as f64,
    })
}

/// Spherical interpolation along the shorter arc.
///
/// `b` is flipped into `a`'s hemisphere when their dot product is negative,
/// otherwise the blend would take the long way round. `t == 0` and `t == 1`
/// return the inputs untouched.
pub fn slerp_shortest(a: DQuat, b: DQuat, t: f64) -> DQuat {
    if t <= 0.0 {
        return a;
    }
    if t >= 1.0 {
        return b;
    }
    let b = if a.dot(b) < 0.0 { -b } else { b };
    a.slerp(b, t).normalize()
}

/// Result of one evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum Evaluation {
    Pose(CameraPose),
    /// Nothing to apply; the morph camera keeps its current pose.
    NoOp,
}

impl Evaluation {
    pub fn into_pose(self) -> Option<CameraPose> {
        match self {
            Self::Pose(p) => Some(p),
            Self::NoOp => None,
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp)
    }
}

/// Receiver of evaluated poses, normally the host's morph camera object.
pub trait PoseSink {
    fn apply_pose(&mut self, pose: CameraPose);
}

impl PoseSink for CameraPose {
    fn apply_pose(&mut self, pose: CameraPose) {
        *self = pose;
    }
}

/// What a guarded update did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum UpdateOutcome {
    Applied,
    NoOp,
    /// Another update was already in flight; nothing was evaluated.
    Suppressed,
}

/// Blends a morph list into a single camera pose.
///
/// Each evaluator owns the re-entrancy guard for the camera it drives, so
/// keep one evaluator per morph camera.
#[derive(Debug, Default)]
pub struct MorphEvaluator {
    guard: ReentrancyGuard,
}

impl MorphEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while [`MorphEvaluator::update`] is applying a pose.
    pub fn is_updating(&self) -> bool {
        self.guard.is_active()
    }

    /// Evaluate the morph camera pose for the current state.
    ///
    /// Never fails: fewer than two waypoints or two unresolvable endpoints
    /// yield [`Evaluation::NoOp`], and a single unresolvable endpoint snaps
    /// to the other one.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(waypoints = list.len(), morph = state.morph_value())
    )]
    pub fn evaluate<S>(&self, list: &MorphList, state: &MorphState, source: &S) -> Evaluation
    where
        S: CameraPoseSource + ?Sized,
    {
        let Some(seg) = select_segment(state.morph_value(), list.len()) else {
            tracing::debug!(waypoints = list.len(), "fewer than two waypoints, nothing to morph");
            return Evaluation::NoOp;
        };

        let a = list.get(seg.index).and_then(|w| source.resolve(w));
        let b = list.get(seg.index + 1).and_then(|w| source.resolve(w));

        match (a, b) {
            (Some(a), Some(b)) => {
                Evaluation::Pose(blend_poses(&a, &b, state.arc_control(), seg.local_t, source))
            }
            (Some(only), None) | (None, Some(only)) => {
                tracing::debug!(segment = seg.index, "one endpoint unresolved, snapping");
                Evaluation::Pose(snap_pose(only, source))
            }
            (None, None) => {
                tracing::debug!(segment = seg.index, "both endpoints unresolved");
                Evaluation::NoOp
            }
        }
    }

    /// Evaluate and hand the pose to `sink`, at most once at a time.
    ///
    /// If `sink` (directly or through host notifications) calls back into
    /// `update` on this evaluator, the nested call returns
    /// [`UpdateOutcome::Suppressed`] and changes nothing.
    pub fn update<S, K>(
        &self,
        list: &MorphList,
        state: &MorphState,
        source: &S,
        sink: &mut K,
    ) -> UpdateOutcome
    where
        S: CameraPoseSource + ?Sized,
        K: PoseSink + ?Sized,
    {
        let Some(_token) = self.guard.enter() else {
            tracing::trace!("update already in progress, skipping");
            return UpdateOutcome::Suppressed;
        };

        match self.evaluate(list, state, source) {
            Evaluation::Pose(pose) => {
                sink.apply_pose(pose);
                UpdateOutcome::Applied
            }
            Evaluation::NoOp => UpdateOutcome::NoOp,
        }
    }
}

fn blend_poses<S>(a: &CameraPose, b: &CameraPose, arc_control: f64, t: f64, source: &S) -> CameraPose
where
    S: CameraPoseSource + ?Sized,
{
    let focus_a = resolve_focus_distance(a, source);
    let focus_b = resolve_focus_distance(b, source);

    CameraPose {
        position: arc_position(a.position, b.position, arc_control, t),
        orientation: slerp_shortest(a.orientation, b.orientation, t),
        focal_length: lerp_f64(a.focal_length, b.focal_length, t),
        dof_enabled: a.dof_enabled || b.dof_enabled,
        focus_distance: lerp_f64(focus_a, focus_b, t),
        aperture_fstop: lerp_f64(a.aperture_fstop, b.aperture_fstop, t),
        aperture_blades: lerp_count(a.aperture_blades, b.aperture_blades, t),
        aperture_ratio: lerp_f64(a.aperture_ratio, b.aperture_ratio, t),
        aperture_rotation: lerp_f64(a.aperture_rotation, b.aperture_rotation, t),
        focus_target: None,
        clip_start: lerp_f64(a.clip_start, b.clip_start, t),
        clip_end: lerp_f64(a.clip_end, b.clip_end, t),
        sensor: Sensor {
            fit: if t < 0.5 { a.sensor.fit } else { b.sensor.fit },
            width: lerp_f64(a.sensor.width, b.sensor.width, t),
            height: lerp_f64(a.sensor.height, b.sensor.height, t),
        },
    }
}

// Transform and lens are kept as-is; only the focus target is folded into
// the distance so every evaluated pose has the same shape.
fn snap_pose<S>(mut pose: CameraPose, source: &S) -> CameraPose
where
    S: CameraPoseSource + ?Sized,
{
    pose.focus_distance = resolve_focus_distance(&pose, source);
    pose.focus_target = None;
    pose
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
