use crate::{
    animation::ease::Ease,
    foundation::core::FrameIndex,
    foundation::error::{MorphError, MorphResult},
    foundation::math::Lerp,
};

/// Keyframed value over the timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframes<T> {
    pub keys: Vec<Keyframe<T>>, // sorted by frame
    #[serde(default)]
    pub mode: InterpMode,
    #[serde(default)]
    pub default: Option<T>, // value when no keys exist
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    pub frame: FrameIndex,
    pub value: T,
    #[serde(default)]
    pub ease: Ease, // ease applied toward next key
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InterpMode {
    Hold,
    #[default]
    Linear,
}

/// Time-driven morph value: frame -> morph value.
pub type MorphDriver = Keyframes<f64>;

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    pub fn new(keys: Vec<Keyframe<T>>, mode: InterpMode) -> MorphResult<Self> {
        let kf = Self {
            keys,
            mode,
            default: None,
        };
        kf.validate()?;
        Ok(kf)
    }

    pub fn validate(&self) -> MorphResult<()> {
        if self.keys.is_empty() && self.default.is_none() {
            return Err(MorphError::animation(
                "Keyframes must have at least one key or a default value",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].frame.0 <= w[1].frame.0) {
            return Err(MorphError::animation(
                "Keyframes keys must be sorted by frame",
            ));
        }
        Ok(())
    }

    /// Value at `frame`. Before the first key and after the last one the
    /// nearest key value is held.
    pub fn sample(&self, frame: FrameIndex) -> MorphResult<T> {
        if self.keys.is_empty() {
            return self
                .default
                .clone()
                .ok_or_else(|| MorphError::animation("Keyframes has no keys and no default"));
        }

        let f = frame.0;
        let idx = self.keys.partition_point(|k| k.frame.0 <= f);

        if idx == 0 {
            return Ok(self.keys[0].value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        // Keys are sorted and a.frame <= f < b.frame, so both spans are
        // non-negative; abs_diff cannot overflow at the ends of the i64 range.
        let denom = b.frame.0.abs_diff(a.frame.0);
        if denom == 0 {
            return Ok(a.value.clone());
        }

        let t = (f.abs_diff(a.frame.0) as f64) / (denom as f64);
        let te = a.ease.apply(t);
        match self.mode {
            InterpMode::Hold => Ok(a.value.clone()),
            InterpMode::Linear => Ok(T::lerp(&a.value, &b.value, te)),
        }
    }
}

impl Keyframes<f64> {
    /// Convenience constructor for linear `(frame, value)` pairs.
    pub fn linear(points: &[(i64, f64)]) -> MorphResult<Self> {
        let keys = points
            .iter()
            .map(|&(frame, value)| Keyframe {
                frame: FrameIndex(frame),
                value,
                ease: Ease::Linear,
            })
            .collect();
        Self::new(keys, InterpMode::Linear)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/driver.rs"]
mod tests;
