/// Live morph parameters owned by the morph camera.
///
/// Fields are private so every mutation goes through a clamping setter.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MorphState {
    #[serde(default)]
    morph_value: f64,
    #[serde(default)]
    arc_control: f64,
}

impl MorphState {
    pub const ARC_MIN: f64 = -1.0;
    pub const ARC_MAX: f64 = 1.0;

    pub fn new(morph_value: f64, arc_control: f64, waypoint_count: usize) -> Self {
        let mut s = Self::default();
        s.set_morph_value(morph_value, waypoint_count);
        s.set_arc_control(arc_control);
        s
    }

    pub fn morph_value(&self) -> f64 {
        self.morph_value
    }

    pub fn arc_control(&self) -> f64 {
        self.arc_control
    }

    /// Set the morph value, clamped to `[0, N-1]` (`[0, 0]` when N < 2).
    /// NaN is ignored.
    pub fn set_morph_value(&mut self, value: f64, waypoint_count: usize) {
        if value.is_nan() {
            tracing::debug!("ignoring NaN morph value");
            return;
        }
        self.morph_value = clamp_morph_value(value, waypoint_count);
    }

    /// Set the arc control, clamped to `[-1, 1]`. NaN is ignored.
    pub fn set_arc_control(&mut self, value: f64) {
        if value.is_nan() {
            tracing::debug!("ignoring NaN arc control");
            return;
        }
        self.arc_control = value.clamp(Self::ARC_MIN, Self::ARC_MAX);
    }

    /// Re-apply both clamps, e.g. after the waypoint count changed or after
    /// loading values from a document.
    pub fn reclamp(&mut self, waypoint_count: usize) {
        let (m, a) = (self.morph_value, self.arc_control);
        self.morph_value = 0.0;
        self.arc_control = 0.0;
        self.set_morph_value(m, waypoint_count);
        self.set_arc_control(a);
    }
}

pub(crate) fn clamp_morph_value(value: f64, waypoint_count: usize) -> f64 {
    let max = waypoint_count.saturating_sub(1) as f64;
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max)
}

#[cfg(test)]
#[path = "../../tests/unit/rig/state.rs"]
mod tests;
