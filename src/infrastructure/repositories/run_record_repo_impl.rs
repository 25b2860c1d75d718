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

use crate::domain::models::run_record::{RunRecord, RunRecordStatus};
use crate::domain::repositories::run_record_repository::RunRecordRepository;
use crate::infrastructure::database::entities::actor_run as actor_run_entity;
use anyhow::anyhow;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 运行记录仓库实现
///
/// 通过 sea-orm 写入 `actor_runs` 表，支持 Postgres 与 SQLite
pub struct RunRecordRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl RunRecordRepositoryImpl {
    /// 创建新的运行记录仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的运行记录仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RunRecordRepository for RunRecordRepositoryImpl {
    async fn save(&self, record: RunRecord) -> anyhow::Result<()> {
        let active_model = actor_run_entity::ActiveModel {
            id: Set(record.id),
            actor_id: Set(record.actor_id),
            run_id: Set(record.run_id),
            dataset_id: Set(record.dataset_id),
            input: Set(record.input),
            results: Set(record.results),
            item_count: Set(record.item_count),
            status: Set(record.status.to_string()),
            run_status: Set(record.run_status),
            error_message: Set(record.error_message),
            created_at: Set(record.created_at.into()),
        };

        actor_run_entity::Entity::insert(active_model)
            .exec(self.db.as_ref())
            .await?;

        Ok(())
    }

    async fn find_by_run_id(&self, run_id: &str) -> anyhow::Result<Option<RunRecord>> {
        let model = actor_run_entity::Entity::find()
            .filter(actor_run_entity::Column::RunId.eq(run_id))
            .order_by_desc(actor_run_entity::Column::CreatedAt)
            .one(self.db.as_ref())
            .await?;

        match model {
            Some(m) => Ok(Some(RunRecord {
                id: m.id,
                actor_id: m.actor_id,
                run_id: m.run_id,
                dataset_id: m.dataset_id,
                input: m.input,
                results: m.results,
                item_count: m.item_count,
                status: m
                    .status
                    .parse::<RunRecordStatus>()
                    .map_err(|e| anyhow!(e))?,
                run_status: m.run_status,
                error_message: m.error_message,
                created_at: m.created_at.into(),
            })),
            None => Ok(None),
        }
    }
}
