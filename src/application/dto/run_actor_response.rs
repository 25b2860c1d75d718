// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::actor_run::DatasetItem;

/// 运行响应数据传输对象
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunActorResponseDto {
    /// 平台运行ID
    pub run_id: String,
    /// 平台数据集ID
    pub dataset_id: String,
    /// 数据集条目
    pub results: Vec<DatasetItem>,
}
