// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 传感器读数线格式测试模块
///
/// 验证设备上报JSON与领域模型之间的序列化约定
use fieldrs::domain::models::sensor::{SensorReading, SensorSnapshot};
use serde_json::json;

#[test]
fn test_partial_reading_parses_known_subset() {
    let reading: SensorReading = serde_json::from_value(json!({
        "N": 120, "P": 80, "K": 60
    }))
    .unwrap();

    assert_eq!(reading.nitrogen, Some(120.0));
    assert_eq!(reading.phosphorus, Some(80.0));
    assert_eq!(reading.potassium, Some(60.0));
    assert_eq!(reading.temperature, None);
    assert!(reading.extra.is_empty());
}

#[test]
fn test_superset_keys_land_in_extra() {
    let reading: SensorReading = serde_json::from_value(json!({
        "ph": 6.5,
        "device_id": "esp32-07",
        "battery_mv": 3700
    }))
    .unwrap();

    assert_eq!(reading.ph, Some(6.5));
    assert_eq!(reading.extra.get("device_id"), Some(&json!("esp32-07")));
    assert_eq!(reading.extra.get("battery_mv"), Some(&json!(3700)));
}

#[test]
fn test_empty_object_is_a_valid_reading() {
    let reading: SensorReading = serde_json::from_value(json!({})).unwrap();
    assert_eq!(reading.nitrogen, None);
    assert!(reading.extra.is_empty());
}

#[test]
fn test_non_object_payload_is_rejected() {
    assert!(serde_json::from_value::<SensorReading>(json!("hello")).is_err());
    assert!(serde_json::from_value::<SensorReading>(json!([1, 2, 3])).is_err());
}

#[test]
fn test_snapshot_wire_format_keeps_device_key_names() {
    let mut snapshot = SensorSnapshot::default();
    let reading: SensorReading = serde_json::from_value(json!({
        "N": 1, "P": 2, "K": 3, "temperature": 4, "humidity": 5, "ph": 6, "rainfall": 7,
        "soil_ec": 0.8
    }))
    .unwrap();
    snapshot.merge(reading);

    let value = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(value["N"], json!(1.0));
    assert_eq!(value["P"], json!(2.0));
    assert_eq!(value["K"], json!(3.0));
    assert_eq!(value["temperature"], json!(4.0));
    assert_eq!(value["humidity"], json!(5.0));
    assert_eq!(value["ph"], json!(6.0));
    assert_eq!(value["rainfall"], json!(7.0));
    assert_eq!(value["soil_ec"], json!(0.8));
}
