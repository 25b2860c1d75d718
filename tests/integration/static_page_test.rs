// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, TestAppOptions, INDEX_HTML};

/// 根路径返回静态页面
#[tokio::test]
async fn root_serves_index_page() {
    let app = create_test_app(TestAppOptions::default()).await;

    let response = app.server.get("/").await;

    response.assert_status_ok();
    response.assert_text(INDEX_HTML);
}

/// 静态资源按文件名提供
#[tokio::test]
async fn assets_are_served_from_static_dir() {
    let app = create_test_app(TestAppOptions::default()).await;

    let response = app.server.get("/script.js").await;

    response.assert_status_ok();
    response.assert_text("console.log('relay');");
}

/// 未知路径回退到首页
#[tokio::test]
async fn unknown_paths_fall_back_to_index() {
    let app = create_test_app(TestAppOptions::default()).await;

    let response = app.server.get("/results/some/deep/link").await;

    response.assert_status_ok();
    response.assert_text(INDEX_HTML);
}
