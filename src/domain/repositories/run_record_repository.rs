// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::run_record::RunRecord;
use anyhow::Result;
use async_trait::async_trait;

/// 运行记录仓库特质
///
/// 定义运行记录数据访问接口
#[async_trait]
pub trait RunRecordRepository: Send + Sync {
    /// 保存运行记录
    async fn save(&self, record: RunRecord) -> Result<()>;
    /// 根据平台运行ID查找记录
    async fn find_by_run_id(&self, run_id: &str) -> Result<Option<RunRecord>>;
}
