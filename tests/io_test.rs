use focus_indicator::frame::{Attachment, HitResult};
use focus_indicator::io::{
    ReplayFrame, TraceEntry, load_replay, object_from_json, object_to_json, write_trace,
};
use focus_indicator::{CameraPose, IndicatorConfig, IndicatorError, SurfaceAnchorId};
use glam::{Mat4, Vec3};
use tempfile::TempDir;

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    let config = IndicatorConfig {
        history_len: 5,
        smoothing_factor: 0.5,
        initially_visible: true,
    };
    object_to_json(&path, &config).unwrap();
    let loaded: IndicatorConfig = object_from_json(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_replay() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("replay.json");
    let json = r#"[
        {"object_visible": false},
        {"hit": {"position": [0.0, -0.5, -1.0]}},
        {"hit": {"position": [0.0, -0.5, -1.1], "surface": 3}, "object_visible": true}
    ]"#;
    std::fs::write(&path, json).unwrap();

    let frames = load_replay(&path).unwrap();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].hit, None);
    assert_eq!(
        frames[1].hit,
        Some(HitResult {
            position: Vec3::new(0.0, -0.5, -1.0),
            surface: None
        })
    );
    assert_eq!(frames[2].hit.unwrap().surface, Some(SurfaceAnchorId(3)));
    assert!(frames[2].object_visible);
}

#[test]
fn test_replay_with_camera() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("replay.json");
    let frames = vec![ReplayFrame {
        object_visible: false,
        hit: None,
        camera: Some(CameraPose::new(
            1_000,
            Mat4::from_translation(Vec3::new(0.0, 1.5, 0.0)),
        )),
    }];
    object_to_json(&path, &frames).unwrap();
    let loaded = load_replay(&path).unwrap();
    assert_eq!(loaded, frames);
}

#[test]
fn test_write_trace() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("trace.json");
    let entries = vec![
        TraceEntry {
            frame: 0,
            state: "no_fix".to_string(),
            display_position: None,
            opacity: 1.0,
            pulsing: None,
            attachment: Attachment::CameraRig,
            visited_surfaces: vec![],
        },
        TraceEntry {
            frame: 1,
            state: "surface_fix".to_string(),
            display_position: Some(Vec3::new(0.0, -0.5, -1.0)),
            opacity: 1.0,
            pulsing: Some(true),
            attachment: Attachment::World,
            visited_surfaces: vec![SurfaceAnchorId(3)],
        },
    ];
    write_trace(&path, &entries).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["attachment"], "camera_rig");
    assert!(json[0]["display_position"].is_null());
    assert_eq!(json[1]["visited_surfaces"][0], 3);
}

#[test]
fn test_missing_and_malformed_files() {
    let result: Result<IndicatorConfig, _> = object_from_json("non_existent_path.json");
    assert!(matches!(result, Err(IndicatorError::Io(_))));

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.json");
    std::fs::write(&path, "{not json").unwrap();
    assert!(matches!(load_replay(&path), Err(IndicatorError::Json(_))));
}
