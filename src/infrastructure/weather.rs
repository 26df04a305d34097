// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::settings::WeatherSettings;
use crate::domain::models::weather::WeatherObservation;
use crate::domain::repositories::weather_repository::{WeatherError, WeatherRepository};

/// OpenWeather天气数据源客户端
pub struct OpenWeatherClient {
    /// 服务端点
    endpoint: String,
    /// API密钥
    api_key: String,
    /// 查询城市
    city: String,
    /// HTTP客户端
    client: reqwest::Client,
}

impl OpenWeatherClient {
    /// 根据配置创建新的客户端实例
    pub fn new(settings: &WeatherSettings) -> Self {
        Self {
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            city: settings.city.clone(),
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(settings.timeout_secs))
                .build()
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl WeatherRepository for OpenWeatherClient {
    /// 获取配置城市的当前天气观测值
    ///
    /// # 返回值
    ///
    /// * `Ok(WeatherObservation)` - 当前观测值
    /// * `Err(WeatherError)` - 请求、状态或解析失败
    async fn current_weather(&self) -> Result<WeatherObservation, WeatherError> {
        debug!("Fetching weather for {}", self.city);

        let url = format!("{}/data/2.5/weather", self.endpoint);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", self.city.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| {
                error!("Failed to reach weather provider for {}: {}", self.city, e);
                WeatherError::Transport(e.to_string())
            })?;

        // 成功与否由响应体中的状态码判定，而非HTTP状态行
        let body: WeatherApiResponse = response.json().await.map_err(|e| {
            error!("Failed to parse weather response for {}: {}", self.city, e);
            WeatherError::Malformed(e.to_string())
        })?;

        body.into_observation()
    }
}

/// 天气API响应结构
#[derive(Debug, Serialize, Deserialize)]
struct WeatherApiResponse {
    /// 状态码，成功时为数字200，出错时可能为字符串
    cod: serde_json::Value,
    /// 错误描述
    message: Option<String>,
    /// 当前气象条件
    main: Option<MainConditions>,
    /// 降水信息，无降水时缺失
    rain: Option<Precipitation>,
}

#[derive(Debug, Serialize, Deserialize)]
struct MainConditions {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct Precipitation {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

impl WeatherApiResponse {
    fn into_observation(self) -> Result<WeatherObservation, WeatherError> {
        if self.cod.as_i64() != Some(200) {
            return Err(WeatherError::Provider(
                self.message
                    .unwrap_or_else(|| format!("status {}", self.cod)),
            ));
        }

        let main = self
            .main
            .ok_or_else(|| WeatherError::Malformed("missing current conditions".to_string()))?;
        let rain_last_hour_mm = self.rain.and_then(|r| r.one_hour).unwrap_or(0.0);

        Ok(WeatherObservation {
            temperature: main.temp,
            humidity: main.humidity,
            rain_last_hour_mm,
        })
    }
}
