use super::*;

fn close(a: DVec3, b: DVec3) -> bool {
    (a - b).length() < 1e-12
}

#[test]
fn zero_arc_is_linear() {
    let p0 = DVec3::new(0.0, 0.0, 0.0);
    let p2 = DVec3::new(10.0, 0.0, 0.0);
    assert_eq!(arc_position(p0, p2, 0.0, 0.5), DVec3::new(5.0, 0.0, 0.0));
    assert_eq!(arc_position(p0, p2, 0.0, 0.25), DVec3::new(2.5, 0.0, 0.0));
    assert!(arc_control_point(p0, p2, 0.0, 0.5).is_none());
}

#[test]
fn endpoints_are_exact_for_any_arc() {
    let p0 = DVec3::new(1.3, -2.7, 0.9);
    let p2 = DVec3::new(-4.1, 8.2, 3.3);
    for k in [-1.0, -0.5, 0.0, 0.3, 1.0] {
        assert_eq!(arc_position(p0, p2, k, 0.0), p0, "k={k}");
        assert_eq!(arc_position(p0, p2, k, 1.0), p2, "k={k}");
    }
}

#[test]
fn full_arc_control_point_offsets_half_the_length() {
    let p0 = DVec3::ZERO;
    let p2 = DVec3::new(10.0, 0.0, 0.0);
    // dir x Z = -Y, offset = 1 * 10 * 0.5 * 1 = 5.
    let p1 = arc_control_point(p0, p2, 1.0, 0.5).unwrap();
    assert!(close(p1, DVec3::new(5.0, -5.0, 0.0)), "{p1:?}");

    // Bezier midpoint is a quarter-weighted blend: half of the control offset.
    let mid = arc_position(p0, p2, 1.0, 0.5);
    assert!(close(mid, DVec3::new(5.0, -2.5, 0.0)), "{mid:?}");
}

#[test]
fn negative_arc_bends_the_other_way() {
    let p0 = DVec3::ZERO;
    let p2 = DVec3::new(10.0, 0.0, 0.0);
    let pos = arc_position(p0, p2, 1.0, 0.5);
    let neg = arc_position(p0, p2, -1.0, 0.5);
    assert!(close(pos.with_y(-pos.y), neg));
    assert!(neg.y > 0.0);
}

#[test]
fn arc_stays_in_the_horizontal_plane() {
    let p0 = DVec3::new(0.0, 0.0, 2.0);
    let p2 = DVec3::new(0.0, 6.0, 2.0);
    for i in 0..=10 {
        let t = f64::from(i) / 10.0;
        let p = arc_position(p0, p2, 0.7, t);
        assert!((p.z - 2.0).abs() < 1e-12);
    }
}

#[test]
fn vertical_segment_uses_y_up() {
    let p0 = DVec3::ZERO;
    let p2 = DVec3::new(0.0, 0.0, 8.0);
    assert_eq!(arc_up_vector(p2 - p0), DVec3::Y);
    let p1 = arc_control_point(p0, p2, 1.0, 0.5).unwrap();
    // Z x Y = -X, offset = 1 * 8 * 0.5 = 4.
    assert!(close(p1, DVec3::new(-4.0, 0.0, 4.0)), "{p1:?}");
    assert!(arc_position(p0, p2, 1.0, 0.5).is_finite());
}

#[test]
fn coincident_endpoints_stay_put() {
    let p = DVec3::new(3.0, 3.0, 3.0);
    assert!(arc_control_point(p, p, 1.0, 0.5).is_none());
    assert_eq!(arc_position(p, p, 1.0, 0.5), p);
}
