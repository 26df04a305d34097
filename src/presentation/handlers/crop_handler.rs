// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{response::IntoResponse, Json};

/// 作物推荐（模拟）
///
/// 忽略输入，返回固定的推荐结果
pub async fn recommend_crop() -> impl IntoResponse {
    Json(serde_json::json!({
        "recommended_crop": "Rice",
        "confidence": 0.95
    }))
}
