use crate::foundation::error::{MorphError, MorphResult};

pub use glam::{DQuat, DVec3};

/// Timeline frame number. Frames may be negative, as host timelines allow.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct FrameIndex(pub i64);

/// Closed frame range `[start, end]`, both ends included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame.
    pub start: FrameIndex,
    /// Last frame (inclusive).
    pub end: FrameIndex,
}

impl FrameRange {
    /// Build a range, rejecting `end < start`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> MorphResult<Self> {
        if end.0 < start.0 {
            return Err(MorphError::validation(format!(
                "FrameRange end ({}) must be >= start ({})",
                end.0, start.0
            )));
        }
        Ok(Self { start, end })
    }

    /// Number of frames in the range, counting both ends.
    pub fn len_frames(self) -> u64 {
        self.end.0.abs_diff(self.start.0).saturating_add(1)
    }

    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 <= self.end.0
    }

    /// Frames in ascending order.
    pub fn iter(self) -> impl Iterator<Item = FrameIndex> {
        (self.start.0..=self.end.0).map(FrameIndex)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
