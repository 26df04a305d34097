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

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use bytes::Bytes;
use std::sync::Arc;
use tracing::info;

use crate::domain::models::sensor::SensorReading;
use crate::domain::services::enrichment_service::{Enrichment, EnrichmentService};
use crate::infrastructure::store::TelemetryStore;

/// 接收设备读数，尝试天气增强后合并进快照
///
/// 请求体解析失败时返回客户端错误且不触碰快照；
/// 天气获取失败不会中断请求，设备原始值原样入库
pub async fn update_sensors(
    Extension(store): Extension<Arc<TelemetryStore>>,
    Extension(enrichment): Extension<Arc<EnrichmentService>>,
    body: Bytes,
) -> impl IntoResponse {
    // Parse manually so a bad payload maps to the documented error body
    // instead of Axum's default rejection.
    let reading: SensorReading = match serde_json::from_slice(&body) {
        Ok(reading) => reading,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "status": "error",
                    "error": e.to_string()
                })),
            )
                .into_response();
        }
    };

    info!("Reading received from device: {:?}", reading);

    let (reading, outcome) = enrichment.enrich(reading).await;
    if let Enrichment::Enriched(observation) = outcome {
        info!(
            "Weather applied: {}°C, {}%, rain {}mm/h",
            observation.temperature, observation.humidity, observation.rain_last_hour_mm
        );
    }

    store.merge(reading).await;

    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "success" })),
    )
        .into_response()
}

/// 返回当前传感器快照
pub async fn get_sensor_data(
    Extension(store): Extension<Arc<TelemetryStore>>,
) -> impl IntoResponse {
    Json(store.snapshot().await)
}
