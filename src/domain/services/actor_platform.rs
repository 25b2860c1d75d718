// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::models::actor_run::{ActorRun, DatasetItem};

/// 平台错误类型
#[derive(Error, Debug)]
pub enum PlatformError {
    /// 平台返回了非 2xx 响应
    #[error("{message}")]
    Api {
        /// HTTP状态码
        status: u16,
        /// 平台错误类型，例如 `record-not-found`
        error_type: Option<String>,
        /// 平台错误信息
        message: String,
    },
    /// 请求未能完成
    #[error("Request to actor platform failed: {0}")]
    Request(#[from] reqwest::Error),
    /// 响应无法解析
    #[error("Unexpected response from actor platform: {0}")]
    InvalidResponse(String),
}

impl PlatformError {
    /// 平台返回的状态码，非 API 错误返回 `None`
    pub fn status_code(&self) -> Option<u16> {
        match self {
            PlatformError::Api { status, .. } => Some(*status),
            PlatformError::Request(e) => e.status().map(|s| s.as_u16()),
            PlatformError::InvalidResponse(_) => None,
        }
    }
}

/// Actor 平台特质
///
/// 对托管 Actor 执行平台的最小抽象：运行并等待结束、读取数据集
#[async_trait]
pub trait ActorPlatform: Send + Sync {
    /// 是否已配置访问凭证
    fn is_configured(&self) -> bool;

    /// 启动 Actor 并等待运行结束
    async fn call(&self, actor_id: &str, input: &Value) -> Result<ActorRun, PlatformError>;

    /// 列出数据集中的全部条目
    async fn list_items(&self, dataset_id: &str) -> Result<Vec<DatasetItem>, PlatformError>;
}
