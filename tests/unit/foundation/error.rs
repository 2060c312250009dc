use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MorphError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        MorphError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        MorphError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn insufficient_waypoints_reports_count() {
    let msg = MorphError::insufficient_waypoints(1).to_string();
    assert!(msg.contains("insufficient waypoints"));
    assert!(msg.contains("got 1"));
}

#[test]
fn json_errors_map_to_serde() {
    let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = MorphError::from(bad);
    assert!(matches!(err, MorphError::Serde(_)));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MorphError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
