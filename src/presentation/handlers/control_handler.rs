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

use axum::{
    extract::{Extension, Json},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::info;

use crate::application::dto::toggle_scan_request::ToggleScanRequestDto;
use crate::infrastructure::store::TelemetryStore;

/// 切换设备扫描状态
///
/// 任意状态之间的切换都是合法的，不做转换校验
pub async fn toggle_scan(
    Extension(store): Extension<Arc<TelemetryStore>>,
    Json(payload): Json<ToggleScanRequestDto>,
) -> impl IntoResponse {
    store.set_scanning(payload.scanning).await;

    let status = if payload.scanning { "STARTED" } else { "STOPPED" };
    info!("System status: {}", status);

    Json(serde_json::json!({
        "status": status,
        "is_scanning": payload.scanning
    }))
}

/// 返回设备轮询的控制指令
///
/// 纯文本"START"或"STOP"，设备侧按文本匹配
pub async fn check_command(Extension(store): Extension<Arc<TelemetryStore>>) -> &'static str {
    if store.is_scanning().await {
        "START"
    } else {
        "STOP"
    }
}
