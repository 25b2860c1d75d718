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

use actor_relay::application::usecases::run_actor::RunActorUseCase;
use actor_relay::config::settings::Settings;
use actor_relay::domain::services::actor_platform::ActorPlatform;
use actor_relay::infrastructure::apify::client::ApifyClient;
use actor_relay::infrastructure::datastore;
use actor_relay::infrastructure::observability::metrics;
use actor_relay::presentation::routes;
use actor_relay::utils::telemetry;
use axum::Extension;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting actor-relay...");

    // Initialize Prometheus Metrics
    let metrics_handle = metrics::init_metrics();

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Actor platform client
    let platform = Arc::new(ApifyClient::new(&settings.apify)?);
    if !platform.is_configured() {
        warn!("Warning: APIFY_API_TOKEN is not set. Please create a .env file with your Apify API token.");
    }

    // 4. Optional run persistence
    let repository = datastore::connect(&settings.datastore).await?;

    let use_case = Arc::new(RunActorUseCase::new(
        platform,
        repository,
        settings.apify.actor_id.clone(),
    ));
    info!(
        actor_id = %use_case.actor_id(),
        persistence = use_case.persistence_enabled(),
        "Relay initialized"
    );

    // 5. Start HTTP server
    let app = routes::routes(&settings.server.static_dir, metrics_handle)
        .layer(Extension(use_case))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
