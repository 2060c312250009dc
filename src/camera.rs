use crate::{
    bake::{
        sampler::{BakeOptions, BakeSampler},
        timeline::Timeline,
        track::BakedTrack,
    },
    eval::evaluator::{MorphEvaluator, UpdateOutcome},
    foundation::{core::FrameIndex, error::MorphResult},
    rig::{pose::CameraPose, state::MorphState, waypoint::MorphList},
    scene::source::CameraPoseSource,
};

/// The live morph camera.
///
/// Owns the waypoint list, the morph state and the pose last applied to the
/// camera, and turns host notifications into guarded re-evaluations.
#[derive(Debug)]
pub struct MorphCamera {
    list: MorphList,
    state: MorphState,
    pose: CameraPose,
    evaluator: MorphEvaluator,
}

impl MorphCamera {
    pub fn new(list: MorphList, state: MorphState) -> Self {
        let mut state = state;
        state.reclamp(list.len());
        Self {
            list,
            state,
            pose: CameraPose::default(),
            evaluator: MorphEvaluator::new(),
        }
    }

    /// Start from an explicit pose instead of the default camera.
    pub fn with_pose(mut self, pose: CameraPose) -> Self {
        self.pose = pose;
        self
    }

    pub fn list(&self) -> &MorphList {
        &self.list
    }

    pub fn state(&self) -> &MorphState {
        &self.state
    }

    /// Pose currently applied to the morph camera.
    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    /// Valid morph value range, `(0, max(N-1, 0))`.
    pub fn morph_range(&self) -> (f64, f64) {
        (0.0, self.list.max_morph_value())
    }

    /// Set the morph value (clamped) and re-evaluate.
    pub fn set_morph_value<S>(&mut self, value: f64, source: &S) -> UpdateOutcome
    where
        S: CameraPoseSource + ?Sized,
    {
        self.state.set_morph_value(value, self.list.len());
        self.update(source)
    }

    /// Set the arc control (clamped) and re-evaluate.
    pub fn set_arc_control<S>(&mut self, value: f64, source: &S) -> UpdateOutcome
    where
        S: CameraPoseSource + ?Sized,
    {
        self.state.set_arc_control(value);
        self.update(source)
    }

    /// Swap in an edited waypoint list, re-clamp the morph value to the new
    /// range and re-evaluate.
    pub fn replace_list<S>(&mut self, list: MorphList, source: &S) -> UpdateOutcome
    where
        S: CameraPoseSource + ?Sized,
    {
        self.list = list;
        self.refresh_range();
        self.update(source)
    }

    /// Re-clamp the morph value after the list length changed.
    pub fn refresh_range(&mut self) {
        self.state.reclamp(self.list.len());
    }

    /// Frame-change notification: move the timeline, pick up a driven morph
    /// value, re-evaluate.
    #[tracing::instrument(level = "debug", skip(self, timeline, source), fields(frame = frame.0))]
    pub fn on_frame_change<S, T>(
        &mut self,
        frame: FrameIndex,
        timeline: &mut T,
        source: &S,
    ) -> MorphResult<UpdateOutcome>
    where
        S: CameraPoseSource + ?Sized,
        T: Timeline + ?Sized,
    {
        if let Some(v) = timeline.set_frame(frame)? {
            self.state.set_morph_value(v, self.list.len());
        }
        Ok(self.update(source))
    }

    /// Dependency-update notification: a reference camera or focus target
    /// may have moved.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn on_dependency_update<S>(&mut self, source: &S) -> UpdateOutcome
    where
        S: CameraPoseSource + ?Sized,
    {
        self.update(source)
    }

    /// Evaluate and apply. A no-op evaluation leaves the current pose as is.
    pub fn update<S>(&mut self, source: &S) -> UpdateOutcome
    where
        S: CameraPoseSource + ?Sized,
    {
        self.evaluator
            .update(&self.list, &self.state, source, &mut self.pose)
    }

    /// Bake `[frame_start, frame_end]` into a track.
    ///
    /// Frame and morph state are restored afterwards and the live pose is
    /// re-evaluated for the restored state.
    pub fn bake<S, T>(
        &mut self,
        frame_start: FrameIndex,
        frame_end: FrameIndex,
        timeline: &mut T,
        source: &S,
        options: BakeOptions,
    ) -> MorphResult<BakedTrack>
    where
        S: CameraPoseSource + ?Sized,
        T: Timeline + ?Sized,
    {
        let track = BakeSampler::new(options).bake(
            &self.list,
            &mut self.state,
            source,
            frame_start,
            frame_end,
            timeline,
        )?;
        self.update(source);
        Ok(track)
    }
}

#[cfg(test)]
#[path = "../tests/unit/camera/camera.rs"]
mod tests;
