// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::presentation::handlers::{
    control_handler, crop_handler, image_handler, sensor_handler, user_handler,
};
use axum::{
    routing::{get, post},
    Router,
};

/// 创建应用路由
///
/// 路径和方法与设备端、浏览器端的既有约定保持一致
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes() -> Router {
    let service_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let api_routes = Router::new()
        .route("/api/user", get(user_handler::get_user))
        .route("/api/toggle-scan", post(control_handler::toggle_scan))
        .route("/api/check-command", get(control_handler::check_command))
        .route("/api/update-sensors", post(sensor_handler::update_sensors))
        .route("/api/upload-image", post(image_handler::upload_image))
        .route("/api/weed-detection", post(image_handler::detect_weeds))
        .route("/api/get-sensor-data", get(sensor_handler::get_sensor_data))
        .route("/api/crop-recommendation", post(crop_handler::recommend_crop));

    Router::new().merge(service_routes).merge(api_routes)
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
