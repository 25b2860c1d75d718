// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - Actor 输入（actor_input）：浏览器提交并转发给平台的参数
/// - Actor 运行（actor_run）：平台返回的运行对象和状态
/// - 运行记录（run_record）：持久化到数据存储的转发结果
pub mod actor_input;
pub mod actor_run;
pub mod run_record;
