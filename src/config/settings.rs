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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、天气数据源、存储和跨域访问等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 天气数据源配置
    pub weather: WeatherSettings,
    /// 存储配置
    pub storage: StorageSettings,
    /// 跨域访问配置
    pub cors: CorsSettings,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 天气数据源配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherSettings {
    /// 天气服务API密钥
    pub api_key: String,
    /// 查询城市
    pub city: String,
    /// 天气服务端点
    pub endpoint: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

/// 存储配置设置
#[derive(Debug, Deserialize)]
pub struct StorageSettings {
    /// 存储类型 (local)
    pub storage_type: String,
    /// 本地存储路径 (当 type=local 时使用)
    pub local_path: Option<String>,
}

/// 跨域访问配置设置
#[derive(Debug, Deserialize)]
pub struct CorsSettings {
    /// 允许的浏览器来源列表
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            // Default Weather settings
            .set_default("weather.api_key", "your-api-key")?
            .set_default("weather.city", "Bengaluru")?
            .set_default("weather.endpoint", "http://api.openweathermap.org")?
            .set_default("weather.timeout_secs", 5)?
            // Default Storage settings
            .set_default("storage.storage_type", "local")?
            .set_default("storage.local_path", "uploads")?
            // Default CORS settings
            .set_default("cors.allowed_origins", vec!["http://localhost:3000"])?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("FIELDRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}
