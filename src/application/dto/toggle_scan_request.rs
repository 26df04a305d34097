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

/// 扫描开关请求数据传输对象
///
/// 浏览器端切换设备扫描状态的请求体，缺失字段默认为关闭
#[derive(Debug, Deserialize, Serialize)]
pub struct ToggleScanRequestDto {
    /// 期望的扫描状态
    #[serde(default)]
    pub scanning: bool,
}
