// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - Actor 平台（actor_platform）：启动 Actor 运行并读取其数据集的外部服务接口
pub mod actor_platform;
