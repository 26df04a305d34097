// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// 传感器增强流程集成测试
///
/// 覆盖update-sensors的全部路径：天气增强成功、数据源报错、
/// 数据源不可达、请求体非法以及快照合并语义
use axum::http::StatusCode;
use serde_json::json;

use super::helpers::{create_test_app, mock_weather_provider, UNREACHABLE_WEATHER_ENDPOINT};

#[tokio::test]
async fn test_update_sensors_enriched_by_provider() {
    let mock = mock_weather_provider(json!({
        "cod": 200,
        "main": { "temp": 25.0, "humidity": 60.0 }
    }))
    .await;
    let app = create_test_app(&mock.uri()).await;

    let response = app
        .server
        .post("/api/update-sensors")
        .json(&json!({
            "N": 90, "P": 42, "K": 43,
            "temperature": 0, "humidity": 0, "ph": 6.5, "rainfall": 0
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "success");

    let response = app.server.get("/api/get-sensor-data").await;
    let body: serde_json::Value = response.json();

    // 设备值保留
    assert_eq!(body["N"], json!(90.0));
    assert_eq!(body["P"], json!(42.0));
    assert_eq!(body["K"], json!(43.0));
    assert_eq!(body["ph"], json!(6.5));
    // 环境字段被数据源覆盖，无降水对象时降雨为0
    assert_eq!(body["temperature"], json!(25.0));
    assert_eq!(body["humidity"], json!(60.0));
    assert_eq!(body["rainfall"], json!(0.0));
}

#[tokio::test]
async fn test_rainfall_is_scaled_to_daily_estimate() {
    let mock = mock_weather_provider(json!({
        "cod": 200,
        "main": { "temp": 20.0, "humidity": 80.0 },
        "rain": { "1h": 2.0 }
    }))
    .await;
    let app = create_test_app(&mock.uri()).await;

    let response = app
        .server
        .post("/api/update-sensors")
        .json(&json!({ "rainfall": 0 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app.server.get("/api/get-sensor-data").await;
    let body: serde_json::Value = response.json();
    // 2mm/h × 24
    assert_eq!(body["rainfall"], json!(48.0));
}

#[tokio::test]
async fn test_provider_error_body_keeps_device_values() {
    let mock = mock_weather_provider(json!({
        "cod": "401",
        "message": "Invalid API key"
    }))
    .await;
    let app = create_test_app(&mock.uri()).await;

    let response = app
        .server
        .post("/api/update-sensors")
        .json(&json!({ "temperature": 21.5, "humidity": 40, "rainfall": 3 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app.server.get("/api/get-sensor-data").await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["temperature"], json!(21.5));
    assert_eq!(body["humidity"], json!(40.0));
    assert_eq!(body["rainfall"], json!(3.0));
}

#[tokio::test]
async fn test_unreachable_provider_keeps_device_values_exactly() {
    let app = create_test_app(UNREACHABLE_WEATHER_ENDPOINT).await;

    let response = app
        .server
        .post("/api/update-sensors")
        .json(&json!({
            "N": 12, "P": 34, "K": 56,
            "temperature": 19.0, "humidity": 33.0, "ph": 7.1, "rainfall": 1.5
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "success");

    let response = app.server.get("/api/get-sensor-data").await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["N"], json!(12.0));
    assert_eq!(body["P"], json!(34.0));
    assert_eq!(body["K"], json!(56.0));
    assert_eq!(body["temperature"], json!(19.0));
    assert_eq!(body["humidity"], json!(33.0));
    assert_eq!(body["ph"], json!(7.1));
    assert_eq!(body["rainfall"], json!(1.5));
}

#[tokio::test]
async fn test_absent_keys_retain_previous_values() {
    let app = create_test_app(UNREACHABLE_WEATHER_ENDPOINT).await;

    let response = app
        .server
        .post("/api/update-sensors")
        .json(&json!({ "N": 10, "ph": 6.5 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app
        .server
        .post("/api/update-sensors")
        .json(&json!({ "N": 20 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app.server.get("/api/get-sensor-data").await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["N"], json!(20.0));
    // 第二次提交未携带的键保持上次的值
    assert_eq!(body["ph"], json!(6.5));
}

#[tokio::test]
async fn test_unknown_device_keys_are_retained() {
    let app = create_test_app(UNREACHABLE_WEATHER_ENDPOINT).await;

    let response = app
        .server
        .post("/api/update-sensors")
        .json(&json!({ "N": 1, "battery_mv": 3700, "device_id": "esp32-07" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app.server.get("/api/get-sensor-data").await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["battery_mv"], json!(3700));
    assert_eq!(body["device_id"], json!("esp32-07"));
}

#[tokio::test]
async fn test_unparseable_body_leaves_snapshot_untouched() {
    let app = create_test_app(UNREACHABLE_WEATHER_ENDPOINT).await;

    // 先写入一个已知状态
    let response = app
        .server
        .post("/api/update-sensors")
        .json(&json!({ "N": 77 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let before = app.store.snapshot().await;

    let response = app
        .server
        .post("/api/update-sensors")
        .text("not json at all")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "error");
    assert!(body["error"].as_str().is_some());

    assert_eq!(app.store.snapshot().await, before);
}

#[tokio::test]
async fn test_non_numeric_known_key_is_a_client_error() {
    let app = create_test_app(UNREACHABLE_WEATHER_ENDPOINT).await;

    let response = app
        .server
        .post("/api/update-sensors")
        .json(&json!({ "N": "high" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_get_sensor_data_starts_all_zero() {
    let app = create_test_app(UNREACHABLE_WEATHER_ENDPOINT).await;

    let response = app.server.get("/api/get-sensor-data").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    for key in ["N", "P", "K", "temperature", "humidity", "ph", "rainfall"] {
        assert_eq!(body[key], json!(0.0), "key {} should start at zero", key);
    }
}
