//! Arc-biased position path between two waypoints.
//!
//! The path is a quadratic Bezier whose control point sits on the segment's
//! midpoint, pushed sideways by `arc_control`. With no arc (or coincident
//! endpoints) it degrades to a straight line.

use crate::foundation::{core::DVec3, math::Lerp};

/// `|dot(dir, Z)|` above which a segment counts as vertical and world-Y
/// replaces world-Z as the reference up vector.
pub const VERTICAL_DOT_TOLERANCE: f64 = 0.999;

/// Position along the arc from `p0` to `p2` at `t` in `[0, 1]`.
///
/// Passes exactly through `p0` at `t == 0` and `p2` at `t == 1` for any arc control.
pub fn arc_position(p0: DVec3, p2: DVec3, arc_control: f64, t: f64) -> DVec3 {
    match arc_control_point(p0, p2, arc_control, t) {
        Some(p1) => quadratic_bezier(p0, p1, p2, t),
        None => <DVec3 as Lerp>::lerp(&p0, &p2, t),
    }
}

/// Control point used at `t`, or `None` when the path is a straight line.
///
/// The sideways offset is `arc_control * |p2 - p0| * 0.5 * (1 - |2t - 1|)`,
/// largest at `t = 0.5` and zero at both ends.
pub fn arc_control_point(p0: DVec3, p2: DVec3, arc_control: f64, t: f64) -> Option<DVec3> {
    if arc_control == 0.0 || p0 == p2 {
        return None;
    }

    let dir = p2 - p0;
    let len = dir.length();
    let perp = dir.cross(arc_up_vector(dir)).normalize_or_zero();
    if perp == DVec3::ZERO {
        tracing::trace!(?p0, ?p2, "degenerate arc geometry, using straight line");
        return None;
    }

    let bulge = 1.0 - (2.0 * t - 1.0).abs();
    let strength = arc_control * len * 0.5 * bulge;
    Some((p0 + p2) * 0.5 + perp * strength)
}

/// World-Z, or world-Y for near-vertical directions.
pub(crate) fn arc_up_vector(dir: DVec3) -> DVec3 {
    let d = dir.normalize_or_zero();
    if d.dot(DVec3::Z).abs() > VERTICAL_DOT_TOLERANCE {
        DVec3::Y
    } else {
        DVec3::Z
    }
}

pub(crate) fn quadratic_bezier(p0: DVec3, p1: DVec3, p2: DVec3, t: f64) -> DVec3 {
    let omt = 1.0 - t;
    p0 * (omt * omt) + p1 * (2.0 * omt * t) + p2 * (t * t)
}

#[cfg(test)]
#[path = "../../tests/unit/eval/arc.rs"]
mod tests;
