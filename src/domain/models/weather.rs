// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 天气观测值
///
/// 数据源返回的当前气象条件，用于覆盖设备上报的环境字段
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeatherObservation {
    /// 温度（摄氏度）
    pub temperature: f64,
    /// 湿度（百分比）
    pub humidity: f64,
    /// 最近一小时降水量（毫米），数据源未报告时为0
    pub rain_last_hour_mm: f64,
}
