// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use actor_relay::application::usecases::run_actor::RunActorUseCase;
use actor_relay::config::settings::{ApifySettings, DatastoreSettings};
use actor_relay::domain::repositories::run_record_repository::RunRecordRepository;
use actor_relay::infrastructure::apify::client::ApifyClient;
use actor_relay::infrastructure::datastore;
use actor_relay::presentation::routes;
use axum::{Extension, Router};
use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ACTOR_ID: &str = "Wpp1BZ6yGWjySadk3";
pub const INDEX_HTML: &str = "<!doctype html><title>Actor Relay</title><form id=\"actorForm\"></form>";

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub apify: MockServer,
    pub repository: Option<Arc<dyn RunRecordRepository>>,
    // Keep the static directory alive
    pub static_dir: TempDir,
}

/// 测试应用选项
pub struct TestAppOptions {
    pub token: Option<&'static str>,
    pub with_datastore: bool,
}

impl Default for TestAppOptions {
    fn default() -> Self {
        Self {
            token: Some("test-token"),
            with_datastore: false,
        }
    }
}

pub fn static_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create static dir");
    std::fs::write(dir.path().join("index.html"), INDEX_HTML).expect("Failed to write index.html");
    std::fs::write(dir.path().join("script.js"), "console.log('relay');")
        .expect("Failed to write script.js");
    dir
}

pub async fn build_router(
    apify: &MockServer,
    options: &TestAppOptions,
    static_dir: &TempDir,
) -> (Router, Option<Arc<dyn RunRecordRepository>>) {
    let apify_settings = ApifySettings {
        token: options.token.map(str::to_string),
        base_url: apify.uri(),
        actor_id: ACTOR_ID.to_string(),
        wait_for_finish_secs: 1,
        max_wait_secs: Some(5),
        request_timeout_secs: 10,
    };
    let platform = Arc::new(ApifyClient::new(&apify_settings).expect("Failed to build client"));

    let repository = if options.with_datastore {
        datastore::connect(&DatastoreSettings {
            url: Some("sqlite::memory:".to_string()),
            key: None,
            table: "actor_runs".to_string(),
            max_connections: Some(1),
            connect_timeout: Some(5),
        })
        .await
        .expect("Failed to connect datastore")
    } else {
        None
    };

    let use_case = Arc::new(RunActorUseCase::new(
        platform,
        repository.clone(),
        ACTOR_ID,
    ));

    let router = routes::routes(static_dir.path(), None).layer(Extension(use_case));
    (router, repository)
}

pub async fn create_test_app(options: TestAppOptions) -> TestApp {
    let apify = MockServer::start().await;
    let static_dir = static_dir();
    let (router, repository) = build_router(&apify, &options, &static_dir).await;

    TestApp {
        server: TestServer::new(router).expect("Failed to start test server"),
        apify,
        repository,
        static_dir,
    }
}

/// 挂载一次成功运行：启动后立即结束，数据集返回 `items`
pub async fn mount_successful_run(apify: &MockServer, run_id: &str, items: Value) {
    Mock::given(method("POST"))
        .and(path(format!("/v2/acts/{}/runs", ACTOR_ID)))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {
                "id": run_id,
                "actId": ACTOR_ID,
                "defaultDatasetId": format!("{}-dataset", run_id),
                "status": "SUCCEEDED"
            }
        })))
        .mount(apify)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/v2/datasets/{}-dataset/items", run_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(items))
        .mount(apify)
        .await;
}
