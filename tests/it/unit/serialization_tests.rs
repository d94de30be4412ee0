//! Wire format of the types hosts exchange with the engine.
//!
//! Snapshots are inline; after an intentional format change run
//! `cargo insta test --accept`.

use timegrid::input::{DeltaMode, Modifiers};
use timegrid::{
    EngineConfig, Item, ItemPatch, Key, PointerPhase, PointerSource, PointerTarget, RawPointerEvent, Rect,
    TimelineClick, WheelEvent,
};

// ============================================================================
// Items
// ============================================================================

#[test]
fn snapshot_item_with_data() {
    let item = Item::new("default", 100.0, 200.0, 1, 7).with_data(serde_json::json!({ "label": "Shift A" }));

    insta::assert_snapshot!(serde_json::to_string_pretty(&item).unwrap(), @r#"
    {
      "type": "default",
      "width": 200.0,
      "row": 1,
      "x": 100.0,
      "group": 7,
      "data": {
        "label": "Shift A"
      }
    }
    "#);
}

#[test]
fn test_item_accepts_string_group_and_missing_data() {
    let item: Item =
        serde_json::from_str(r#"{"type":"shift","width":50,"row":3,"x":0,"group":"night"}"#).unwrap();

    assert_eq!(item.group, Key::Name("night".to_string()));
    assert_eq!(item.row, 3);
    assert!(item.data.is_null());
}

#[test]
fn test_item_patch_is_sparse() {
    let patch: ItemPatch = serde_json::from_str(r#"{"width": 120}"#).unwrap();

    assert_eq!(patch.width, Some(120.0));
    assert_eq!(patch.x, None);
    assert_eq!(patch.item_type, None);
}

// ============================================================================
// Input events
// ============================================================================

#[test]
fn test_raw_pointer_event_defaults() {
    let raw: RawPointerEvent =
        serde_json::from_str(r#"{"source":"mouse","phase":"down","touches":[{"x":10,"y":20}]}"#).unwrap();

    assert_eq!(raw.source, PointerSource::Mouse);
    assert_eq!(raw.phase, PointerPhase::Down);
    assert_eq!(raw.target, PointerTarget::HitTest);
    assert_eq!(raw.modifiers, Modifiers::default());
    assert_eq!(raw.changed, None);
}

#[test]
fn test_pointer_target_tagging() {
    let background: PointerTarget = serde_json::from_str(r#"{"kind":"background"}"#).unwrap();
    assert_eq!(background, PointerTarget::Background);

    let item: PointerTarget = serde_json::from_str(
        r#"{"kind":"item","index":4,"bounds":{"left":1,"top":2,"width":3,"height":4}}"#,
    )
    .unwrap();
    assert_eq!(
        item,
        PointerTarget::Item {
            index: 4,
            bounds: Some(Rect::new(1.0, 2.0, 3.0, 4.0)),
        }
    );

    let hit_test: PointerTarget = serde_json::from_str(r#"{"kind":"hitTest"}"#).unwrap();
    assert_eq!(hit_test, PointerTarget::HitTest);
}

#[test]
fn test_wheel_event_modes() {
    let wheel: WheelEvent =
        serde_json::from_str(r#"{"deltaY":-3,"deltaMode":"line","modifiers":{"control":true}}"#).unwrap();

    assert_eq!(wheel.delta_y, -3.0);
    assert_eq!(wheel.delta_mode, DeltaMode::Line);
    assert!(wheel.modifiers.zoom());
    assert!(!wheel.modifiers.shift);
}

// ============================================================================
// Callbacks and config
// ============================================================================

#[test]
fn snapshot_timeline_click() {
    let click = TimelineClick {
        position: 52.0,
        row_index: 2,
        row_key: Some(Key::Number(2)),
    };

    insta::assert_snapshot!(serde_json::to_string_pretty(&click).unwrap(), @r#"
    {
      "position": 52.0,
      "rowIndex": 2,
      "rowKey": 2
    }
    "#);
}

#[test]
fn test_partial_config_inherits_defaults() {
    let config = EngineConfig::from_json_str(r#"{"snapUnit": 15, "zoom": {"maxRowHeight": 80}}"#).unwrap();

    assert_eq!(config.snap_unit, Some(15.0));
    assert_eq!(config.zoom.max_row_height, 80.0);
    assert_eq!(config.zoom.min_row_height, EngineConfig::default().zoom.min_row_height);
    assert!(config.drag_enabled);
}
