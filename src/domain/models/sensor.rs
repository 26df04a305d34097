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
use serde_json::{Map, Value};

/// 最新传感器快照
///
/// 进程内唯一的合并后读数，启动时全部初始化为零。
/// 七个固定键之外的设备自定义键保留在 `extra` 中原样透传。
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SensorSnapshot {
    /// 氮含量
    #[serde(rename = "N")]
    pub nitrogen: f64,
    /// 磷含量
    #[serde(rename = "P")]
    pub phosphorus: f64,
    /// 钾含量
    #[serde(rename = "K")]
    pub potassium: f64,
    /// 温度（摄氏度）
    pub temperature: f64,
    /// 湿度（百分比）
    pub humidity: f64,
    /// 土壤pH值
    pub ph: f64,
    /// 降雨量（毫米）
    pub rainfall: f64,
    /// 设备提交的未知键
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SensorSnapshot {
    /// 将设备上报的部分读数按键浅合并进快照
    ///
    /// 读数中出现的键逐键覆盖，未出现的键保持原值（last-write-wins）
    pub fn merge(&mut self, reading: SensorReading) {
        if let Some(v) = reading.nitrogen {
            self.nitrogen = v;
        }
        if let Some(v) = reading.phosphorus {
            self.phosphorus = v;
        }
        if let Some(v) = reading.potassium {
            self.potassium = v;
        }
        if let Some(v) = reading.temperature {
            self.temperature = v;
        }
        if let Some(v) = reading.humidity {
            self.humidity = v;
        }
        if let Some(v) = reading.ph {
            self.ph = v;
        }
        if let Some(v) = reading.rainfall {
            self.rainfall = v;
        }
        for (key, value) in reading.extra {
            self.extra.insert(key, value);
        }
    }
}

/// 设备上报的部分读数
///
/// 所有已知键均为可选，未知键保留透传
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SensorReading {
    #[serde(rename = "N", skip_serializing_if = "Option::is_none")]
    pub nitrogen: Option<f64>,
    #[serde(rename = "P", skip_serializing_if = "Option::is_none")]
    pub phosphorus: Option<f64>,
    #[serde(rename = "K", skip_serializing_if = "Option::is_none")]
    pub potassium: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ph: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rainfall: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
