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

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::models::sensor::SensorReading;
use crate::domain::models::weather::WeatherObservation;
use crate::domain::repositories::weather_repository::WeatherRepository;

/// 小时降水量换算为日估算值的固定系数
///
/// 原始部署约定的近似值，按约定原样保留
pub const RAINFALL_DAILY_FACTOR: f64 = 24.0;

/// 增强结果
///
/// 区分读数是否被数据源观测值覆盖，便于调用方和测试断言实际路径
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Enrichment {
    /// 环境字段已被数据源观测值覆盖
    Enriched(WeatherObservation),
    /// 数据源不可用，保留设备原始值
    Original,
}

/// 读数增强服务
///
/// 尝试获取当前天气并覆盖读数的温度、湿度和降雨字段。
/// 获取失败时记录日志并原样返回读数，绝不中断请求。
pub struct EnrichmentService {
    weather: Arc<dyn WeatherRepository>,
}

impl EnrichmentService {
    /// 创建新的增强服务实例
    pub fn new(weather: Arc<dyn WeatherRepository>) -> Self {
        Self { weather }
    }

    /// 用数据源观测值增强设备读数
    ///
    /// # 参数
    ///
    /// * `reading` - 设备上报的部分读数
    ///
    /// # 返回值
    ///
    /// 返回（可能被覆盖的）读数及实际走过的路径
    pub async fn enrich(&self, mut reading: SensorReading) -> (SensorReading, Enrichment) {
        match self.weather.current_weather().await {
            Ok(observation) => {
                debug!(
                    "Weather observation: {}°C, {}%, rain {}mm/h",
                    observation.temperature, observation.humidity, observation.rain_last_hour_mm
                );
                reading.temperature = Some(observation.temperature);
                reading.humidity = Some(observation.humidity);
                reading.rainfall = Some(observation.rain_last_hour_mm * RAINFALL_DAILY_FACTOR);
                (reading, Enrichment::Enriched(observation))
            }
            Err(e) => {
                warn!("Weather fetch failed, keeping device values: {}", e);
                (reading, Enrichment::Original)
            }
        }
    }
}
