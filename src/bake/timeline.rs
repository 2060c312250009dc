use crate::{
    animation::driver::MorphDriver,
    foundation::{core::FrameIndex, error::MorphResult},
};

/// Host timeline as seen by the bake: the "frame setter".
pub trait Timeline {
    fn current_frame(&self) -> FrameIndex;

    /// Move global time to `frame`.
    ///
    /// Returns the morph value at that frame when it is time-driven, or
    /// `None` when the live value should stay as it is.
    fn set_frame(&mut self, frame: FrameIndex) -> MorphResult<Option<f64>>;
}

/// Timeline whose morph value optionally follows a keyframed driver.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrivenTimeline {
    frame: FrameIndex,
    driver: Option<MorphDriver>,
}

impl DrivenTimeline {
    pub fn new(frame: FrameIndex, driver: Option<MorphDriver>) -> Self {
        Self { frame, driver }
    }

    /// Timeline without a driver; the morph value is never touched.
    pub fn fixed(frame: FrameIndex) -> Self {
        Self::new(frame, None)
    }

    pub fn driver(&self) -> Option<&MorphDriver> {
        self.driver.as_ref()
    }

    /// Morph value the driver produces at `frame`, without moving the timeline.
    pub fn driven_value(&self, frame: FrameIndex) -> MorphResult<Option<f64>> {
        self.driver.as_ref().map(|d| d.sample(frame)).transpose()
    }
}

impl Timeline for DrivenTimeline {
    fn current_frame(&self) -> FrameIndex {
        self.frame
    }

    fn set_frame(&mut self, frame: FrameIndex) -> MorphResult<Option<f64>> {
        self.frame = frame;
        self.driven_value(frame)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bake/timeline.rs"]
mod tests;
