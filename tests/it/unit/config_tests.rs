//! Loading engine configs from disk.

use std::io::Write;
use tempfile::NamedTempFile;
use timegrid::{EngineConfig, TimelineError};

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_config_file() {
    let file = write_config(r#"{"snapUnit": 30, "resizeEnabled": false, "zoom": {"wheelSensitivity": 5}}"#);

    let config = EngineConfig::load(file.path()).unwrap();

    assert_eq!(config.snap_unit, Some(30.0));
    assert!(!config.resize_enabled);
    assert_eq!(config.zoom.wheel_sensitivity, 5.0);
    assert_eq!(config.min_item_width, 50.0);
}

#[test]
fn test_empty_object_is_default() {
    let file = write_config("{}");

    assert_eq!(EngineConfig::load(file.path()).unwrap(), EngineConfig::default());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = EngineConfig::load(&dir.path().join("missing.json")).unwrap_err();

    assert!(matches!(err, TimelineError::Io(_)));
}

#[test]
fn test_malformed_json_is_parse_error() {
    let file = write_config("{ snapUnit: ");

    let err = EngineConfig::load(file.path()).unwrap_err();

    assert!(matches!(err, TimelineError::Json(_)));
}

#[test]
fn test_inverted_zoom_range_is_rejected() {
    let file = write_config(r#"{"zoom": {"minColumnWidth": 500, "maxColumnWidth": 100}}"#);

    let err = EngineConfig::load(file.path()).unwrap_err();

    assert!(matches!(err, TimelineError::InvalidConfig(_)));
    assert!(err.to_string().contains("columnWidth"));
}

#[test]
fn test_negative_threshold_is_rejected() {
    let config = EngineConfig {
        resize_threshold_px: -1.0,
        ..EngineConfig::default()
    };

    assert!(config.validate().is_err());
}
