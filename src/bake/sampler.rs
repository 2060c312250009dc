use crate::{
    bake::{timeline::Timeline, track::BakedTrack},
    eval::evaluator::{Evaluation, MorphEvaluator},
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{MorphError, MorphResult},
    },
    rig::{state::MorphState, waypoint::MorphList},
    scene::source::CameraPoseSource,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BakeOptions {
    /// Keep baked Euler angles continuous across frames.
    pub unwrap_euler: bool,
}

impl Default for BakeOptions {
    fn default() -> Self {
        Self { unwrap_euler: true }
    }
}

/// Resamples the live morph into a fixed per-frame track.
#[derive(Debug, Default)]
pub struct BakeSampler {
    options: BakeOptions,
    evaluator: MorphEvaluator,
}

impl BakeSampler {
    pub fn new(options: BakeOptions) -> Self {
        Self {
            options,
            evaluator: MorphEvaluator::new(),
        }
    }

    pub fn options(&self) -> BakeOptions {
        self.options
    }

    /// Bake every frame of `[frame_start, frame_end]`.
    ///
    /// For each frame the timeline is moved first (which may drive the morph
    /// value), then the pose is evaluated. Frames that evaluate to nothing
    /// are left out of the track and listed in `skipped`.
    ///
    /// The timeline frame and `state` are restored to their values from
    /// before the call, whether the bake succeeds or not. Fewer than two
    /// waypoints fail with [`MorphError::InsufficientWaypoints`] before
    /// anything is touched.
    #[tracing::instrument(
        skip_all,
        fields(waypoints = list.len(), start = frame_start.0, end = frame_end.0)
    )]
    pub fn bake<S, T>(
        &self,
        list: &MorphList,
        state: &mut MorphState,
        source: &S,
        frame_start: FrameIndex,
        frame_end: FrameIndex,
        timeline: &mut T,
    ) -> MorphResult<BakedTrack>
    where
        S: CameraPoseSource + ?Sized,
        T: Timeline + ?Sized,
    {
        if !list.can_interpolate() {
            return Err(MorphError::insufficient_waypoints(list.len()));
        }
        let range = FrameRange::new(frame_start, frame_end)?;

        let saved_frame = timeline.current_frame();
        let saved_state = *state;
        tracing::info!(
            frames = range.len_frames(),
            "baking morph camera from frame {} to {}",
            range.start.0,
            range.end.0
        );

        let result = self.sample_range(list, state, source, range, timeline);

        let restored = timeline.set_frame(saved_frame);
        *state = saved_state;

        let track = result?;
        restored?;

        tracing::info!(
            samples = track.len(),
            skipped = track.skipped.len(),
            frame = saved_frame.0,
            morph = saved_state.morph_value(),
            "bake complete, restored frame and morph value"
        );
        Ok(track)
    }

    fn sample_range<S, T>(
        &self,
        list: &MorphList,
        state: &mut MorphState,
        source: &S,
        range: FrameRange,
        timeline: &mut T,
    ) -> MorphResult<BakedTrack>
    where
        S: CameraPoseSource + ?Sized,
        T: Timeline + ?Sized,
    {
        let cap = usize::try_from(range.len_frames()).unwrap_or(usize::MAX);
        let mut track = BakedTrack::with_capacity(cap.min(1 << 16));

        for frame in range.iter() {
            if let Some(v) = timeline.set_frame(frame)? {
                state.set_morph_value(v, list.len());
            }
            match self.evaluator.evaluate(list, state, source) {
                Evaluation::Pose(pose) => track.push(frame, pose, self.options.unwrap_euler),
                Evaluation::NoOp => {
                    tracing::debug!(frame = frame.0, "no pose for frame, skipping");
                    track.skip(frame);
                }
            }
        }
        Ok(track)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bake/sampler.rs"]
mod tests;
