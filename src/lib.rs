//! morphcam drives a virtual camera by blending between an ordered list of
//! reference camera poses.
//!
//! A single scalar, the *morph value*, selects a position along the list:
//! `0` is the first waypoint, `N - 1` the last, and fractional values blend
//! the two neighbouring waypoints. Position follows an arc-biased quadratic
//! path, orientation a shortest-arc slerp, and lens settings blend linearly.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: a [`CameraPoseSource`] supplies the current world-space
//!    [`CameraPose`] of each [`Waypoint`].
//! 2. **Evaluate**: [`MorphEvaluator`] picks the active segment and blends
//!    its two poses into one ([`Evaluation::Pose`]), or reports
//!    [`Evaluation::NoOp`] when nothing can be evaluated.
//! 3. **Apply**: [`MorphCamera`] applies the pose in response to host
//!    notifications, guarded against re-entrant updates.
//! 4. **Bake** (optional): [`BakeSampler`] resamples the morph over a frame
//!    range into a [`BakedTrack`] and restores the live frame and state.
//!
//! Evaluation never fails; the only hard error on the live path is baking
//! with fewer than two waypoints ([`MorphError::InsufficientWaypoints`]).
#![forbid(unsafe_code)]

mod animation;
mod bake;
mod camera;
mod eval;
mod foundation;
mod rig;
mod rig_file;
mod scene;

pub use animation::driver::{InterpMode, Keyframe, Keyframes, MorphDriver};
pub use animation::ease::Ease;
pub use bake::sampler::{BakeOptions, BakeSampler};
pub use bake::timeline::{DrivenTimeline, Timeline};
pub use bake::track::{BakedKeyframe, BakedTrack};
pub use camera::MorphCamera;
pub use eval::arc::{VERTICAL_DOT_TOLERANCE, arc_control_point, arc_position};
pub use eval::evaluator::{
    Evaluation, MorphEvaluator, PoseSink, Segment, UpdateOutcome, select_segment, slerp_shortest,
};
pub use eval::focus::resolve_focus_distance;
pub use eval::guard::{GuardToken, ReentrancyGuard};
pub use foundation::core::{DQuat, DVec3, FrameIndex, FrameRange};
pub use foundation::error::{MorphError, MorphResult};
pub use foundation::math::Lerp;
pub use rig::pose::{CameraPose, Sensor, SensorFit};
pub use rig::state::MorphState;
pub use rig::waypoint::{MorphList, Waypoint};
pub use rig_file::RigFile;
pub use scene::source::CameraPoseSource;
pub use scene::store::Scene;
