// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 迁移命令行入口
///
/// 对 `DATABASE_URL` 指向的数据库执行 `actor_runs` 表的 up/down/status 等操作
#[async_std::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
