// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::presentation::handlers::{actor_handler, metrics_handler};
use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// 创建应用路由
///
/// # 参数
///
/// * `static_dir` - 静态页面目录，未匹配的 GET 请求回退到其中的 `index.html`
/// * `metrics` - Prometheus 句柄，存在时挂载 `/metrics`
///
/// # 返回值
///
/// 返回配置好的路由，`RunActorUseCase` 需由调用方以 `Extension` 注入
pub fn routes(static_dir: impl AsRef<Path>, metrics: Option<PrometheusHandle>) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route("/run-actor", post(actor_handler::run_actor));

    if let Some(handle) = metrics {
        router = router
            .route("/metrics", get(metrics_handler::metrics))
            .layer(Extension(handle));
    }

    let static_dir = static_dir.as_ref();
    router.fallback_service(
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html"))),
    )
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
