// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::weather::WeatherObservation;

/// 天气数据源错误类型
#[derive(Error, Debug)]
pub enum WeatherError {
    /// 网络传输错误
    #[error("Weather request failed: {0}")]
    Transport(String),
    /// 数据源返回非成功状态
    #[error("Weather provider rejected the request: {0}")]
    Provider(String),
    /// 响应格式错误
    #[error("Malformed weather response: {0}")]
    Malformed(String),
}

/// 天气数据源特质
///
/// 定义当前天气观测值的获取接口
#[async_trait]
pub trait WeatherRepository: Send + Sync {
    /// 获取配置城市的当前天气观测值
    async fn current_weather(&self) -> Result<WeatherObservation, WeatherError>;
}
