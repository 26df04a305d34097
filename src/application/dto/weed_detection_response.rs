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

use serde::{Deserialize, Serialize};

/// 杂草检测响应数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct WeedDetectionResponseDto {
    /// 上传图片的base64编码回传
    pub result_image: String,
    /// 检测结果描述（当前为模拟占位）
    pub detections: String,
}
