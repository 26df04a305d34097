// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use std::time::Duration;
use tower_http::cors::CorsLayer;

use crate::config::settings::CorsSettings;

/// 构建跨域访问中间件
///
/// 浏览器端以携带凭据的方式访问API，因此来源必须显式列出，
/// 不能使用通配符。配置的来源非法时启动即失败。
pub fn build_cors_layer(settings: &CorsSettings) -> CorsLayer {
    let origins: Vec<_> = settings
        .allowed_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
