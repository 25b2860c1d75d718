// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::actor_run::{ActorRun, DatasetItem};

/// 运行记录实体
///
/// 每次转发尝试对应一条记录，保存平台运行标识、输入、
/// 结果以及最终状态。转发失败时结果为空并附带错误信息。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// 记录唯一标识符
    pub id: Uuid,
    /// 被调用的 Actor
    pub actor_id: String,
    /// 平台运行ID，调用失败时可能为空
    pub run_id: Option<String>,
    /// 平台数据集ID
    pub dataset_id: Option<String>,
    /// 实际发送的输入
    pub input: Value,
    /// 数据集条目
    pub results: Option<Value>,
    /// 条目数量
    pub item_count: i32,
    /// 记录状态
    pub status: RunRecordStatus,
    /// 平台运行状态
    pub run_status: Option<String>,
    /// 错误信息
    pub error_message: Option<String>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

/// 运行记录状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunRecordStatus {
    /// 运行结束且已取回数据集
    Completed,
    /// 调用平台或读取数据集失败
    Failed,
}

impl fmt::Display for RunRecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RunRecordStatus::Completed => write!(f, "completed"),
            RunRecordStatus::Failed => write!(f, "failed"),
        }
    }
}

impl FromStr for RunRecordStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(RunRecordStatus::Completed),
            "failed" => Ok(RunRecordStatus::Failed),
            other => Err(format!("unknown run record status: {}", other)),
        }
    }
}

impl RunRecord {
    /// 为成功取回结果的运行创建记录
    pub fn completed(actor_id: &str, input: Value, run: &ActorRun, items: &[DatasetItem]) -> Self {
        Self {
            id: Uuid::new_v4(),
            actor_id: actor_id.to_string(),
            run_id: Some(run.id.clone()),
            dataset_id: Some(run.default_dataset_id.clone()),
            input,
            results: Some(Value::Array(items.to_vec())),
            item_count: items.len() as i32,
            status: RunRecordStatus::Completed,
            run_status: Some(run.status.to_string()),
            error_message: None,
            created_at: Utc::now(),
        }
    }

    /// 为失败的转发创建记录
    ///
    /// `run` 为已知的运行（数据集读取失败时存在）
    pub fn failed(actor_id: &str, input: Value, run: Option<&ActorRun>, error: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            actor_id: actor_id.to_string(),
            run_id: run.map(|r| r.id.clone()),
            dataset_id: run.map(|r| r.default_dataset_id.clone()),
            input,
            results: None,
            item_count: 0,
            status: RunRecordStatus::Failed,
            run_status: run.map(|r| r.status.to_string()),
            error_message: Some(error),
            created_at: Utc::now(),
        }
    }
}
