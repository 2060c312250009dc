use super::*;

fn pose_with_yaw(deg: f64) -> CameraPose {
    CameraPose::at(DVec3::ZERO, DQuat::from_rotation_z(deg.to_radians()))
}

#[test]
fn lookup_by_frame() {
    let mut t = BakedTrack::default();
    t.push(FrameIndex(2), pose_with_yaw(0.0), true);
    t.push(FrameIndex(4), pose_with_yaw(10.0), true);
    t.skip(FrameIndex(3));

    assert_eq!(t.len(), 2);
    assert!(t.get(FrameIndex(2)).is_some());
    assert!(t.get(FrameIndex(3)).is_none());
    assert_eq!(t.skipped, vec![FrameIndex(3)]);
}

#[test]
fn euler_reconstructs_the_rotation() {
    let mut t = BakedTrack::default();
    let q = DQuat::from_euler(glam::EulerRot::ZYX, 0.4, -0.2, 0.9);
    t.push(
        FrameIndex(0),
        CameraPose::at(DVec3::ZERO, q),
        true,
    );
    let k = t.get(FrameIndex(0)).unwrap();
    assert!(k.euler_orientation().dot(k.pose.orientation).abs() > 1.0 - 1e-12);
}

#[test]
fn unwrap_only_when_requested() {
    let mut wrapped = BakedTrack::default();
    let mut raw = BakedTrack::default();
    for (i, deg) in [175.0, -175.0].into_iter().enumerate() {
        wrapped.push(FrameIndex(i as i64), pose_with_yaw(deg), true);
        raw.push(FrameIndex(i as i64), pose_with_yaw(deg), false);
    }
    let wz = wrapped.keyframes[1].rotation_euler.z.to_degrees();
    let rz = raw.keyframes[1].rotation_euler.z.to_degrees();
    assert!((wz - 185.0).abs() < 1e-9, "{wz}");
    assert!((rz + 175.0).abs() < 1e-9, "{rz}");
}

#[test]
fn skipped_is_omitted_from_json_when_empty() {
    let mut t = BakedTrack::default();
    t.push(FrameIndex(0), CameraPose::default(), true);
    let v = serde_json::to_value(&t).unwrap();
    assert!(v.get("skipped").is_none());
    assert_eq!(v["keyframes"][0]["frame"], 0);
}
