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
    extract::{Extension, Multipart},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use bytes::Bytes;
use std::sync::Arc;
use tracing::{error, info};

use crate::application::dto::weed_detection_response::WeedDetectionResponseDto;
use crate::domain::repositories::storage_repository::StorageRepository;
use crate::presentation::errors::AppError;

/// 现场抓拍图片的固定存储键，每次上传无条件覆盖
pub const FIELD_CAPTURE_KEY: &str = "field_capture.jpg";

/// 接收设备上传的原始图片字节并写入单一文件槽
pub async fn upload_image(
    Extension(storage): Extension<Arc<dyn StorageRepository>>,
    body: Bytes,
) -> impl IntoResponse {
    if body.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "status": "error",
                "message": "No data received"
            })),
        )
            .into_response();
    }

    match storage.save(FIELD_CAPTURE_KEY, &body).await {
        Ok(()) => {
            info!("Image received and saved ({} bytes)", body.len());
            (
                StatusCode::OK,
                Json(serde_json::json!({ "status": "success" })),
            )
                .into_response()
        }
        Err(e) => {
            error!("Image save error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "status": "error" })),
            )
                .into_response()
        }
    }
}

/// 杂草检测（模拟）
///
/// 将上传图片回传为base64并附带固定的占位检测描述，
/// 不包含真实检测逻辑
pub async fn detect_weeds(mut multipart: Multipart) -> Result<Response, AppError> {
    let mut image: Option<Bytes> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("image") {
            image = Some(field.bytes().await?);
            break;
        }
    }

    let Some(image) = image else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "No image uploaded" })),
        )
            .into_response());
    };

    let response = WeedDetectionResponseDto {
        result_image: BASE64.encode(&image),
        detections: "3 weeds detected (Simulation)".to_string(),
    };

    Ok(Json(response).into_response())
}
