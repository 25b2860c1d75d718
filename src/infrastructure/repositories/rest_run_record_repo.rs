// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::run_record::RunRecord;
use crate::domain::repositories::run_record_repository::RunRecordRepository;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// Supabase 运行记录仓库
///
/// 通过 PostgREST 接口（`/rest/v1/{table}`）写入和查询运行记录，
/// 使用服务密钥同时作为 `apikey` 和 Bearer 令牌
pub struct RestRunRecordRepository {
    http: reqwest::Client,
    table_url: Url,
    key: String,
}

impl RestRunRecordRepository {
    pub fn new(base_url: &str, key: &str, table: &str) -> Result<Self> {
        let mut table_url =
            Url::parse(base_url).with_context(|| format!("Invalid datastore URL: {}", base_url))?;
        table_url
            .path_segments_mut()
            .map_err(|_| anyhow::anyhow!("Datastore URL cannot be a base: {}", base_url))?
            .pop_if_empty()
            .extend(["rest", "v1", table]);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build datastore HTTP client")?;

        Ok(Self {
            http,
            table_url,
            key: key.to_string(),
        })
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
    }
}

#[async_trait]
impl RunRecordRepository for RestRunRecordRepository {
    async fn save(&self, record: RunRecord) -> Result<()> {
        let response = self
            .request(self.http.post(self.table_url.clone()))
            .header("Prefer", "return=minimal")
            .json(&record)
            .send()
            .await
            .context("Failed to send run record to datastore")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "Datastore returned error: {} - {}",
                status,
                error_text
            ));
        }

        Ok(())
    }

    async fn find_by_run_id(&self, run_id: &str) -> Result<Option<RunRecord>> {
        let response = self
            .request(self.http.get(self.table_url.clone()))
            .query(&[
                ("run_id", format!("eq.{}", run_id)),
                ("select", "*".to_string()),
                ("order", "created_at.desc".to_string()),
                ("limit", "1".to_string()),
            ])
            .send()
            .await
            .context("Failed to query datastore")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "Datastore returned error: {} - {}",
                status,
                error_text
            ));
        }

        let mut rows: Vec<RunRecord> = response
            .json()
            .await
            .context("Failed to parse datastore response")?;
        Ok(rows.pop())
    }
}
