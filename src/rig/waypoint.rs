/// An ordered slot in the morph list, optionally bound to a reference camera.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Waypoint {
    pub camera: Option<String>,
}

impl Waypoint {
    pub fn bound(camera: impl Into<String>) -> Self {
        Self {
            camera: Some(camera.into()),
        }
    }

    pub fn empty() -> Self {
        Self { camera: None }
    }

    pub fn is_empty(&self) -> bool {
        self.camera.is_none()
    }
}

/// Ordered waypoints the morph camera travels through.
///
/// Editing the list (insert, remove, reorder) is the host's business; the
/// engine only reads it.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct MorphList {
    waypoints: Vec<Waypoint>,
}

impl MorphList {
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        Self { waypoints }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Interpolation needs a segment, i.e. at least two waypoints.
    pub fn can_interpolate(&self) -> bool {
        self.waypoints.len() >= 2
    }

    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.iter()
    }

    /// Upper bound of the morph value, `N - 1`, or zero for fewer than two waypoints.
    pub fn max_morph_value(&self) -> f64 {
        self.waypoints.len().saturating_sub(1) as f64
    }
}

impl FromIterator<Waypoint> for MorphList {
    fn from_iter<I: IntoIterator<Item = Waypoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rig/waypoint.rs"]
mod tests;
