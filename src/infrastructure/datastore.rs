// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
use tracing::{info, warn};

use crate::config::settings::{DatastoreKind, DatastoreSettings};
use crate::domain::repositories::run_record_repository::RunRecordRepository;
use crate::infrastructure::database::connection;
use crate::infrastructure::repositories::rest_run_record_repo::RestRunRecordRepository;
use crate::infrastructure::repositories::run_record_repo_impl::RunRecordRepositoryImpl;

/// 根据配置创建运行记录仓库
///
/// 未配置数据存储时返回 `None`，持久化功能关闭。
/// 数据库后端会在返回前执行迁移。
pub async fn connect(settings: &DatastoreSettings) -> Result<Option<Arc<dyn RunRecordRepository>>> {
    match settings.kind() {
        DatastoreKind::Disabled => {
            if settings.url.as_deref().is_some_and(|url| !url.trim().is_empty()) {
                warn!("Datastore URL is set but SUPABASE_KEY is missing. Run persistence disabled.");
            } else {
                info!("No datastore configured. Run persistence disabled.");
            }
            Ok(None)
        }
        DatastoreKind::Rest { url, key } => {
            let repo = RestRunRecordRepository::new(&url, &key, &settings.table)?;
            info!(table = %settings.table, "Persisting runs through Supabase REST");
            Ok(Some(Arc::new(repo)))
        }
        DatastoreKind::Sql { url } => {
            let db = connection::create_pool(&url, settings)
                .await
                .context("Failed to connect to datastore")?;
            info!("Database connection established");

            info!("Running database migrations...");
            Migrator::up(&db, None)
                .await
                .context("Failed to apply datastore migrations")?;
            info!("Database migrations applied");

            Ok(Some(Arc::new(RunRecordRepositoryImpl::new(Arc::new(db)))))
        }
    }
}
