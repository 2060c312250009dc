use glam::{DQuat, DVec3, EulerRot};

/// Linear blend that reproduces `a` at `t == 0` and `b` at `t == 1` bit-for-bit.
pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a * (1.0 - t) + b * t
    }
}

impl Lerp for DVec3 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        *a * (1.0 - t) + *b * t
    }
}

pub(crate) fn lerp_f64(a: f64, b: f64, t: f64) -> f64 {
    <f64 as Lerp>::lerp(&a, &b, t)
}

/// Blend of two counts, truncated toward zero: 5 -> 6 at `t = 0.5` gives 5.
pub(crate) fn lerp_count(a: u32, b: u32, t: f64) -> u32 {
    lerp_f64(f64::from(a), f64::from(b), t) as u32
}

/// XYZ Euler angles in radians, applied X first, then Y, then Z (`R = Rz * Ry * Rx`).
pub(crate) fn quat_to_euler_xyz(q: DQuat) -> DVec3 {
    let (z, y, x) = q.to_euler(EulerRot::ZYX);
    DVec3::new(x, y, z)
}

pub(crate) fn euler_xyz_to_quat(e: DVec3) -> DQuat {
    DQuat::from_euler(EulerRot::ZYX, e.z, e.y, e.x)
}

/// Shift each angle of `cur` by whole turns so it lies within half a turn of `prev`.
pub(crate) fn unwrap_euler(prev: DVec3, cur: DVec3) -> DVec3 {
    fn axis(prev: f64, cur: f64) -> f64 {
        let turns = ((prev - cur) / std::f64::consts::TAU).round();
        cur + turns * std::f64::consts::TAU
    }
    DVec3::new(axis(prev.x, cur.x), axis(prev.y, cur.y), axis(prev.z, cur.z))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
