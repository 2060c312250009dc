/// Timing of a morph-driver key toward the next key.
///
/// Camera moves usually want to leave and settle softly, so the curves here
/// are the acceleration shapes a camera operator would pick. All of them pin
/// `0 -> 0` and `1 -> 1`, so easing never moves a key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    #[default]
    Linear,
    /// Start at rest, accelerate into the next key.
    In,
    /// Leave at speed, settle on the next key.
    Out,
    /// Start and settle at rest (smoothstep).
    InOut,
}

impl Ease {
    /// Map normalized time between two keys to normalized progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::In => t * t,
            Self::Out => t * (2.0 - t),
            Self::InOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
