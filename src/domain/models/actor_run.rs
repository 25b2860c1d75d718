// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Actor 运行
///
/// 平台返回的运行对象中本服务关心的部分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorRun {
    /// 平台分配的运行ID
    pub id: String,
    /// 运行默认数据集ID
    pub default_dataset_id: String,
    /// 当前运行状态
    pub status: ActorRunStatus,
}

/// Actor 运行状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum ActorRunStatus {
    Ready,
    Running,
    Succeeded,
    Failed,
    TimingOut,
    TimedOut,
    Aborting,
    Aborted,
    #[serde(other)]
    Unknown,
}

impl ActorRunStatus {
    /// 运行是否已经结束
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ActorRunStatus::Succeeded
                | ActorRunStatus::Failed
                | ActorRunStatus::TimedOut
                | ActorRunStatus::Aborted
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActorRunStatus::Ready => "READY",
            ActorRunStatus::Running => "RUNNING",
            ActorRunStatus::Succeeded => "SUCCEEDED",
            ActorRunStatus::Failed => "FAILED",
            ActorRunStatus::TimingOut => "TIMING-OUT",
            ActorRunStatus::TimedOut => "TIMED-OUT",
            ActorRunStatus::Aborting => "ABORTING",
            ActorRunStatus::Aborted => "ABORTED",
            ActorRunStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ActorRunStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 数据集条目，结构由 Actor 决定
pub type DatasetItem = Value;
