// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Instant;

use metrics::{counter, histogram};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::application::dto::run_actor_response::RunActorResponseDto;
use crate::domain::models::actor_input::ActorInput;
use crate::domain::models::actor_run::ActorRunStatus;
use crate::domain::models::run_record::RunRecord;
use crate::domain::repositories::run_record_repository::RunRecordRepository;
use crate::domain::services::actor_platform::{ActorPlatform, PlatformError};

/// 缺少令牌时返回给调用方的固定信息
pub const TOKEN_NOT_CONFIGURED: &str = "APIFY_API_TOKEN is not configured in .env file.";

/// 转发用例错误类型
#[derive(Error, Debug)]
pub enum RunActorError {
    /// 未配置平台令牌
    #[error("{}", TOKEN_NOT_CONFIGURED)]
    NotConfigured,
    /// 请求体不合法
    #[error("{0}")]
    InvalidInput(String),
    /// 平台调用失败
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

// === Section: Use Case Definition ===

/// 运行 Actor 用例
///
/// 依次执行：默认输入替换、启动运行并等待、读取数据集、可选持久化
pub struct RunActorUseCase {
    platform: Arc<dyn ActorPlatform>,
    repository: Option<Arc<dyn RunRecordRepository>>,
    actor_id: String,
}

// === Section: Implementation ===

impl RunActorUseCase {
    pub fn new(
        platform: Arc<dyn ActorPlatform>,
        repository: Option<Arc<dyn RunRecordRepository>>,
        actor_id: impl Into<String>,
    ) -> Self {
        Self {
            platform,
            repository,
            actor_id: actor_id.into(),
        }
    }

    pub fn actor_id(&self) -> &str {
        &self.actor_id
    }

    /// 是否启用了持久化
    pub fn persistence_enabled(&self) -> bool {
        self.repository.is_some()
    }

    pub async fn execute(
        &self,
        input: Option<ActorInput>,
    ) -> Result<RunActorResponseDto, RunActorError> {
        if !self.platform.is_configured() {
            return Err(RunActorError::NotConfigured);
        }

        let input = match input {
            Some(input) if !input.is_empty() => input,
            _ => {
                info!("No input provided in request body, using default input.");
                ActorInput::default_input()
            }
        };
        let input_value = input.to_value();

        counter!("actor_runs_total").increment(1);
        let start = Instant::now();
        info!(
            actor_id = %self.actor_id,
            url_count = input.urls().len(),
            input = %input_value,
            "Running actor"
        );

        let run = match self.platform.call(&self.actor_id, &input_value).await {
            Ok(run) => run,
            Err(e) => {
                error!(actor_id = %self.actor_id, "Error running actor: {}", e);
                self.record_failure(RunRecord::failed(
                    &self.actor_id,
                    input_value,
                    None,
                    e.to_string(),
                ))
                .await;
                return Err(e.into());
            }
        };

        info!(
            run_id = %run.id,
            dataset_id = %run.default_dataset_id,
            status = %run.status,
            "Actor run finished"
        );
        if run.status != ActorRunStatus::Succeeded {
            warn!(run_id = %run.id, status = %run.status, "Actor run did not succeed");
        }

        debug!(dataset_id = %run.default_dataset_id, "Fetching results from dataset");
        let items = match self.platform.list_items(&run.default_dataset_id).await {
            Ok(items) => items,
            Err(e) => {
                error!(run_id = %run.id, "Error fetching dataset items: {}", e);
                self.record_failure(RunRecord::failed(
                    &self.actor_id,
                    input_value,
                    Some(&run),
                    e.to_string(),
                ))
                .await;
                return Err(e.into());
            }
        };

        info!(run_id = %run.id, "Results fetched: {} items", items.len());
        histogram!("actor_run_duration_seconds").record(start.elapsed().as_secs_f64());
        counter!("actor_run_items_total").increment(items.len() as u64);

        self.persist(RunRecord::completed(
            &self.actor_id,
            input_value,
            &run,
            &items,
        ))
        .await;

        Ok(RunActorResponseDto {
            run_id: run.id,
            dataset_id: run.default_dataset_id,
            results: items,
        })
    }

    async fn record_failure(&self, record: RunRecord) {
        counter!("actor_runs_failed_total").increment(1);
        self.persist(record).await;
    }

    /// 保存运行记录，失败只记录日志，不影响响应
    async fn persist(&self, record: RunRecord) {
        let Some(repository) = &self.repository else {
            return;
        };

        let record_id = record.id;
        match repository.save(record).await {
            Ok(()) => {
                counter!("run_records_saved_total").increment(1);
                debug!(%record_id, "Run record saved");
            }
            Err(e) => {
                counter!("run_record_save_failures_total").increment(1);
                warn!(%record_id, "Failed to save run record: {:#}", e);
            }
        }
    }
}

#[cfg(test)]
#[path = "run_actor_test.rs"]
mod tests;
