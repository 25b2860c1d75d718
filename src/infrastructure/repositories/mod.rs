// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 提供 `RunRecordRepository` 的两种实现：
/// - sea-orm 直连数据库（run_record_repo_impl）
/// - Supabase PostgREST 接口（rest_run_record_repo）
pub mod rest_run_record_repo;
pub mod run_record_repo_impl;
