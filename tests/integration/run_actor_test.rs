// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, mount_successful_run, TestAppOptions, ACTOR_ID};
use actor_relay::domain::models::actor_input::ActorInput;
use actor_relay::domain::models::run_record::RunRecordStatus;
use axum::http::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

/// 完整转发流程测试
///
/// 验证输入被原样转发，并返回运行ID、数据集ID和条目
#[tokio::test]
async fn run_actor_returns_envelope() {
    let app = create_test_app(TestAppOptions::default()).await;
    let input = json!({
        "urls": ["https://www.linkedin.com/company/amazon"],
        "limitPerSource": 2,
        "deepScrape": false,
        "rawData": false
    });

    Mock::given(method("POST"))
        .and(path(format!("/v2/acts/{}/runs", ACTOR_ID)))
        .and(body_json(&input))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "id": "run-1", "defaultDatasetId": "run-1-dataset", "status": "READY" }
        })))
        .expect(1)
        .mount(&app.apify)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/actor-runs/run-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "id": "run-1", "defaultDatasetId": "run-1-dataset", "status": "SUCCEEDED" }
        })))
        .mount(&app.apify)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/datasets/run-1-dataset/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "url": "https://www.linkedin.com/company/amazon", "name": "Amazon", "followers": 30000000 }
        ])))
        .mount(&app.apify)
        .await;

    let response = app.server.post("/run-actor").json(&input).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["runId"], "run-1");
    assert_eq!(body["datasetId"], "run-1-dataset");
    assert_eq!(body["results"][0]["name"], "Amazon");
}

/// 空请求体使用默认输入
#[tokio::test]
async fn run_actor_substitutes_default_input() {
    let app = create_test_app(TestAppOptions::default()).await;

    Mock::given(method("POST"))
        .and(path(format!("/v2/acts/{}/runs", ACTOR_ID)))
        .and(body_json(ActorInput::default_input().to_value()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "id": "run-2", "defaultDatasetId": "run-2-dataset", "status": "SUCCEEDED" }
        })))
        .expect(2)
        .mount(&app.apify)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/datasets/run-2-dataset/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&app.apify)
        .await;

    let response = app.server.post("/run-actor").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["results"], json!([]));

    let response = app.server.post("/run-actor").json(&json!({})).await;
    response.assert_status_ok();
}

/// 字段类型不校验，原样交给 Actor
#[tokio::test]
async fn run_actor_forwards_mistyped_fields_verbatim() {
    let app = create_test_app(TestAppOptions::default()).await;
    let input = json!({
        "limitPerSource": "10",
        "urls": "https://www.linkedin.com/company/amazon",
        "deepScrape": "true"
    });

    Mock::given(method("POST"))
        .and(path(format!("/v2/acts/{}/runs", ACTOR_ID)))
        .and(body_json(&input))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "id": "run-5", "defaultDatasetId": "run-5-dataset", "status": "SUCCEEDED" }
        })))
        .expect(1)
        .mount(&app.apify)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/datasets/run-5-dataset/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&app.apify)
        .await;

    let response = app.server.post("/run-actor").json(&input).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["runId"], "run-5");
}

/// 空数组请求体同样使用默认输入
#[tokio::test]
async fn run_actor_treats_empty_array_as_no_input() {
    let app = create_test_app(TestAppOptions::default()).await;

    Mock::given(method("POST"))
        .and(path(format!("/v2/acts/{}/runs", ACTOR_ID)))
        .and(body_json(ActorInput::default_input().to_value()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "id": "run-6", "defaultDatasetId": "run-6-dataset", "status": "SUCCEEDED" }
        })))
        .expect(1)
        .mount(&app.apify)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/datasets/run-6-dataset/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&app.apify)
        .await;

    app.server
        .post("/run-actor")
        .json(&json!([]))
        .await
        .assert_status_ok();
}

/// 缺少令牌时返回固定错误且不调用平台
#[tokio::test]
async fn run_actor_without_token_returns_500() {
    let app = create_test_app(TestAppOptions {
        token: None,
        ..TestAppOptions::default()
    })
    .await;

    let response = app.server.post("/run-actor").json(&json!({})).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "APIFY_API_TOKEN is not configured in .env file." })
    );
    assert!(app.apify.received_requests().await.unwrap_or_default().is_empty());
}

/// 平台错误状态码透传
#[tokio::test]
async fn run_actor_passes_platform_status_through() {
    let app = create_test_app(TestAppOptions::default()).await;

    Mock::given(method("POST"))
        .and(path(format!("/v2/acts/{}/runs", ACTOR_ID)))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "type": "token-not-valid", "message": "Authentication token is not valid." }
        })))
        .mount(&app.apify)
        .await;

    let response = app.server.post("/run-actor").json(&json!({ "limitPerSource": 1 })).await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], "Authentication token is not valid.");
    assert_eq!(body["details"]["type"], "token-not-valid");
}

/// 非对象请求体返回 400
#[tokio::test]
async fn run_actor_rejects_non_object_body() {
    let app = create_test_app(TestAppOptions::default()).await;

    let response = app
        .server
        .post("/run-actor")
        .text("[\"https://example.com\"]")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "Request body must be a JSON object"
    );
}

/// 启用数据存储时保存成功和失败的运行
#[tokio::test]
async fn run_actor_persists_run_records() {
    let app = create_test_app(TestAppOptions {
        with_datastore: true,
        ..TestAppOptions::default()
    })
    .await;
    let repository = app.repository.clone().expect("datastore enabled");

    mount_successful_run(&app.apify, "run-3", json!([{ "title": "Post" }, { "title": "Reply" }])).await;

    app.server
        .post("/run-actor")
        .json(&json!({ "urls": ["https://www.linkedin.com/company/amazon"] }))
        .await
        .assert_status_ok();

    let record = repository
        .find_by_run_id("run-3")
        .await
        .unwrap()
        .expect("record saved");
    assert_eq!(record.status, RunRecordStatus::Completed);
    assert_eq!(record.actor_id, ACTOR_ID);
    assert_eq!(record.item_count, 2);
    assert_eq!(
        record.input,
        json!({ "urls": ["https://www.linkedin.com/company/amazon"] })
    );
}

/// 数据集读取失败时记录失败状态
#[tokio::test]
async fn run_actor_records_dataset_failure() {
    let app = create_test_app(TestAppOptions {
        with_datastore: true,
        ..TestAppOptions::default()
    })
    .await;
    let repository = app.repository.clone().expect("datastore enabled");

    Mock::given(method("POST"))
        .and(path(format!("/v2/acts/{}/runs", ACTOR_ID)))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "id": "run-4", "defaultDatasetId": "run-4-dataset", "status": "FAILED" }
        })))
        .mount(&app.apify)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/datasets/run-4-dataset/items"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "type": "record-not-found", "message": "Dataset was not found" }
        })))
        .mount(&app.apify)
        .await;

    let response = app.server.post("/run-actor").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let record = repository
        .find_by_run_id("run-4")
        .await
        .unwrap()
        .expect("record saved");
    assert_eq!(record.status, RunRecordStatus::Failed);
    assert_eq!(record.run_status.as_deref(), Some("FAILED"));
    assert_eq!(record.error_message.as_deref(), Some("Dataset was not found"));
}
