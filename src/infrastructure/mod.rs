// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含与外部系统交互的技术实现：
/// - Apify（apify）：`ActorPlatform` 的 REST 客户端实现
/// - 数据库（database）：数据库连接和实体映射
/// - 数据存储（datastore）：按配置选择运行记录仓库
/// - 可观测性（observability）：Prometheus 指标
/// - 仓库实现（repositories）：领域仓库接口的具体实现
///
/// 基础设施层依赖于领域层的抽象接口。
pub mod apify;
pub mod database;
pub mod datastore;
pub mod observability;
pub mod repositories;
