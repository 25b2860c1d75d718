// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义 `/run-actor` 的请求解析和响应结构
pub mod run_actor_request;
pub mod run_actor_response;
