use super::*;
use crate::{
    animation::driver::Keyframes,
    bake::timeline::DrivenTimeline,
    foundation::core::{DQuat, DVec3},
    rig::{pose::CameraPose, waypoint::Waypoint},
    scene::store::Scene,
};

fn scene() -> Scene {
    let mut s = Scene::new();
    s.insert_camera(
        "a",
        CameraPose::at(DVec3::ZERO, DQuat::IDENTITY).with_focal_length(30.0),
    )
    .insert_camera(
        "b",
        CameraPose::at(DVec3::new(10.0, 0.0, 0.0), DQuat::IDENTITY).with_focal_length(50.0),
    );
    s
}

fn ab() -> MorphList {
    ["a", "b"].into_iter().map(Waypoint::bound).collect()
}

fn ramp(frames: i64, to: f64) -> DrivenTimeline {
    let driver = Keyframes::linear(&[(0, 0.0), (frames, to)]).unwrap();
    DrivenTimeline::new(FrameIndex(42), Some(driver))
}

#[test]
fn one_sample_per_frame_and_state_is_restored() {
    let list = ab();
    let mut state = MorphState::new(0.3, 0.25, list.len());
    let before = state;
    let mut tl = ramp(10, 1.0);

    let track = BakeSampler::default()
        .bake(&list, &mut state, &scene(), FrameIndex(0), FrameIndex(10), &mut tl)
        .unwrap();

    assert_eq!(track.len(), 11);
    assert!(track.skipped.is_empty());
    let frames: Vec<i64> = track.frames().map(|f| f.0).collect();
    assert_eq!(frames, (0..=10).collect::<Vec<_>>());

    assert_eq!(state, before);
    assert_eq!(tl.current_frame(), FrameIndex(42));
}

#[test]
fn baked_keyframes_carry_the_aperture_shape() {
    let mut s = Scene::new();
    s.insert_camera("a", CameraPose::default().with_aperture_shape(5, 1.0, 0.0))
        .insert_camera(
            "b",
            CameraPose::at(DVec3::new(10.0, 0.0, 0.0), DQuat::IDENTITY)
                .with_aperture_shape(6, 2.0, 0.5),
        );
    let list = ab();
    let mut state = MorphState::default();
    let mut tl = ramp(10, 1.0);

    let track = BakeSampler::default()
        .bake(&list, &mut state, &s, FrameIndex(0), FrameIndex(10), &mut tl)
        .unwrap();

    let mid = &track.get(FrameIndex(5)).unwrap().pose;
    assert_eq!(mid.aperture_blades, 5);
    assert_eq!(mid.aperture_ratio, 1.5);
    assert_eq!(mid.aperture_rotation, 0.25);

    let last = &track.get(FrameIndex(10)).unwrap().pose;
    assert_eq!(last.aperture_blades, 6);
    assert_eq!(last.aperture_ratio, 2.0);

    let json = serde_json::to_value(&track).unwrap();
    assert_eq!(json["keyframes"][5]["pose"]["aperture_blades"], 5);
}

#[test]
fn driven_morph_value_moves_the_camera() {
    let list = ab();
    let mut state = MorphState::new(0.0, 0.0, list.len());
    let mut tl = ramp(10, 1.0);

    let track = BakeSampler::default()
        .bake(&list, &mut state, &scene(), FrameIndex(0), FrameIndex(10), &mut tl)
        .unwrap();

    let first = track.get(FrameIndex(0)).unwrap();
    let mid = track.get(FrameIndex(5)).unwrap();
    let last = track.get(FrameIndex(10)).unwrap();
    assert_eq!(first.pose.position, DVec3::ZERO);
    assert_eq!(mid.pose.position, DVec3::new(5.0, 0.0, 0.0));
    assert_eq!(mid.pose.focal_length, 40.0);
    assert_eq!(last.pose.position, DVec3::new(10.0, 0.0, 0.0));
    assert!(track.get(FrameIndex(11)).is_none());
}

#[test]
fn undriven_bake_holds_the_live_value() {
    let list = ab();
    let mut state = MorphState::new(0.5, 0.0, list.len());
    let mut tl = DrivenTimeline::fixed(FrameIndex(0));

    let track = BakeSampler::default()
        .bake(&list, &mut state, &scene(), FrameIndex(-2), FrameIndex(2), &mut tl)
        .unwrap();

    assert_eq!(track.len(), 5);
    assert!(track.iter().all(|k| k.pose.position == DVec3::new(5.0, 0.0, 0.0)));
}

#[test]
fn too_few_waypoints_fails_without_side_effects() {
    let list: MorphList = ["a"].into_iter().map(Waypoint::bound).collect();
    let mut state = MorphState::new(0.0, 0.5, list.len());
    let before = state;
    let mut tl = ramp(10, 1.0);

    let err = BakeSampler::default()
        .bake(&list, &mut state, &scene(), FrameIndex(0), FrameIndex(10), &mut tl)
        .unwrap_err();

    assert!(matches!(err, MorphError::InsufficientWaypoints { count: 1 }));
    assert_eq!(state, before);
    assert_eq!(tl.current_frame(), FrameIndex(42));
}

#[test]
fn inverted_range_is_rejected() {
    let list = ab();
    let mut state = MorphState::default();
    let mut tl = DrivenTimeline::fixed(FrameIndex(0));
    let err = BakeSampler::default()
        .bake(&list, &mut state, &scene(), FrameIndex(5), FrameIndex(4), &mut tl)
        .unwrap_err();
    assert!(matches!(err, MorphError::Validation(_)));
}

#[test]
fn unresolvable_frames_are_skipped() {
    let list = MorphList::new(vec![
        Waypoint::empty(),
        Waypoint::bound("gone"),
        Waypoint::bound("a"),
        Waypoint::bound("b"),
    ]);
    let mut state = MorphState::new(0.0, 0.0, list.len());
    let driver = Keyframes::linear(&[(0, 0.0), (1, 1.0), (2, 2.0), (3, 3.0)]).unwrap();
    let mut tl = DrivenTimeline::new(FrameIndex(0), Some(driver));

    let track = BakeSampler::default()
        .bake(&list, &mut state, &scene(), FrameIndex(0), FrameIndex(3), &mut tl)
        .unwrap();

    assert_eq!(track.skipped, vec![FrameIndex(0)]);
    let frames: Vec<i64> = track.frames().map(|f| f.0).collect();
    assert_eq!(frames, vec![1, 2, 3]);
    assert_eq!(track.get(FrameIndex(1)).unwrap().pose.position, DVec3::ZERO);
    assert_eq!(
        track.get(FrameIndex(3)).unwrap().pose.position,
        DVec3::new(10.0, 0.0, 0.0)
    );
}

struct FailingTimeline {
    frame: FrameIndex,
    fail_at: FrameIndex,
}

impl Timeline for FailingTimeline {
    fn current_frame(&self) -> FrameIndex {
        self.frame
    }

    fn set_frame(&mut self, frame: FrameIndex) -> MorphResult<Option<f64>> {
        if frame == self.fail_at {
            return Err(MorphError::animation("driver exploded"));
        }
        self.frame = frame;
        Ok(Some(1.0))
    }
}

#[test]
fn timeline_failure_restores_state() {
    let list = ab();
    let mut state = MorphState::new(0.25, 0.0, list.len());
    let before = state;
    let mut tl = FailingTimeline {
        frame: FrameIndex(7),
        fail_at: FrameIndex(3),
    };

    let err = BakeSampler::default()
        .bake(&list, &mut state, &scene(), FrameIndex(0), FrameIndex(5), &mut tl)
        .unwrap_err();

    assert!(err.to_string().contains("driver exploded"));
    assert_eq!(state, before);
    assert_eq!(tl.current_frame(), FrameIndex(7));
}

#[test]
fn bake_is_reproducible() {
    let list = ab();
    let run = || {
        let mut state = MorphState::new(0.0, 0.6, list.len());
        let mut tl = ramp(24, 1.0);
        let track = BakeSampler::default()
            .bake(&list, &mut state, &scene(), FrameIndex(0), FrameIndex(24), &mut tl)
            .unwrap();
        serde_json::to_vec(&track).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn euler_angles_stay_continuous_across_the_wrap() {
    let mut s = Scene::new();
    s.insert_camera(
        "a",
        CameraPose::at(DVec3::ZERO, DQuat::from_rotation_z(170f64.to_radians())),
    )
    .insert_camera(
        "b",
        CameraPose::at(DVec3::ZERO, DQuat::from_rotation_z(190f64.to_radians())),
    );
    let list = ab();

    let bake = |options: BakeOptions| {
        let mut state = MorphState::default();
        let mut tl = ramp(4, 1.0);
        BakeSampler::new(options)
            .bake(&list, &mut state, &s, FrameIndex(0), FrameIndex(4), &mut tl)
            .unwrap()
    };

    let smooth = bake(BakeOptions::default());
    let z: Vec<f64> = smooth.iter().map(|k| k.rotation_euler.z).collect();
    for w in z.windows(2) {
        assert!((w[1] - w[0] - 5f64.to_radians()).abs() < 1e-6, "{z:?}");
    }
    assert!((z[4] - 190f64.to_radians()).abs() < 1e-6, "{z:?}");

    let raw = bake(BakeOptions {
        unwrap_euler: false,
    });
    let rz: Vec<f64> = raw.iter().map(|k| k.rotation_euler.z).collect();
    assert!(rz.iter().all(|z| z.abs() <= std::f64::consts::PI + 1e-9));
}
