// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Apify 平台模块
///
/// 提供 `ActorPlatform` 的 Apify REST API 实现
pub mod client;
