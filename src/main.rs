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

use axum::Extension;
use fieldrs::config::settings::Settings;
use fieldrs::domain::repositories::weather_repository::WeatherRepository;
use fieldrs::domain::services::enrichment_service::EnrichmentService;
use fieldrs::infrastructure::storage;
use fieldrs::infrastructure::store::TelemetryStore;
use fieldrs::infrastructure::weather::OpenWeatherClient;
use fieldrs::presentation::middleware::cors::build_cors_layer;
use fieldrs::presentation::routes;
use fieldrs::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting fieldrs...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Initialize state and storage
    let store = Arc::new(TelemetryStore::new());
    let storage_repo = storage::create_storage_repository(&settings.storage)?;

    // 4. Initialize weather client and enrichment service
    let weather: Arc<dyn WeatherRepository> = Arc::new(OpenWeatherClient::new(&settings.weather));
    let enrichment = Arc::new(EnrichmentService::new(weather));

    // 5. Start HTTP server
    let app = routes::routes()
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&settings.cors))
        .layer(Extension(store))
        .layer(Extension(storage_repo))
        .layer(Extension(enrichment));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
