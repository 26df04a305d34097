// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{response::IntoResponse, Json};

/// 返回固定的用户身份信息
///
/// 无输入、无副作用，总是成功
pub async fn get_user() -> impl IntoResponse {
    Json(serde_json::json!({
        "username": "Developer",
        "email": "dev@bmsit.in"
    }))
}
