// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{describe_counter, describe_histogram, Unit};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::warn;

/// 初始化指标系统
///
/// 安装全局 Prometheus 记录器并注册转发相关指标。
/// 记录器已被安装时（例如测试中重复初始化）返回 `None`。
pub fn init_metrics() -> Option<PrometheusHandle> {
    let handle = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => handle,
        Err(e) => {
            warn!("Failed to install Prometheus recorder: {}", e);
            return None;
        }
    };

    describe_counter!("actor_runs_total", "Total number of actor runs requested");
    describe_counter!(
        "actor_runs_failed_total",
        "Total number of actor runs that failed to start, finish or return a dataset"
    );
    describe_histogram!(
        "actor_run_duration_seconds",
        Unit::Seconds,
        "Time from starting an actor run to receiving its dataset"
    );
    describe_counter!(
        "actor_run_items_total",
        "Total number of dataset items returned to clients"
    );
    describe_counter!("run_records_saved_total", "Total number of run records persisted");
    describe_counter!(
        "run_record_save_failures_total",
        "Total number of run records that could not be persisted"
    );

    Some(handle)
}
