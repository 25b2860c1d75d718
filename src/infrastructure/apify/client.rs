// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

use crate::config::settings::ApifySettings;
use crate::domain::models::actor_run::{ActorRun, DatasetItem};
use crate::domain::services::actor_platform::{ActorPlatform, PlatformError};

/// Apify 响应外层，所有对象都包在 `data` 中
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// Apify 错误响应体
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(rename = "type")]
    error_type: Option<String>,
    message: Option<String>,
}

// waitForFinish has whole-second granularity; 0 returns immediately
const MIN_POLL_WAIT: Duration = Duration::from_secs(1);

/// Apify 客户端
///
/// 基于reqwest实现的 Apify REST API v2 客户端，只覆盖
/// “运行 Actor 并等待结束”和“读取数据集条目”两个操作
pub struct ApifyClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
    wait_for_finish: Duration,
    max_wait: Option<Duration>,
}

impl ApifyClient {
    /// 创建新的客户端
    ///
    /// # 参数
    ///
    /// * `settings` - Apify 配置
    ///
    /// # 返回值
    ///
    /// * `Ok(ApifyClient)` - 客户端实例
    /// * `Err(PlatformError)` - 基础地址非法或 HTTP 客户端构建失败
    pub fn new(settings: &ApifySettings) -> Result<Self, PlatformError> {
        let base_url = Url::parse(&settings.base_url).map_err(|e| {
            PlatformError::InvalidResponse(format!(
                "Invalid Apify base URL {}: {}",
                settings.base_url, e
            ))
        })?;

        let http = reqwest::Client::builder()
            .user_agent(concat!("actor-relay/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            token: settings.token().map(str::to_string),
            wait_for_finish: Duration::from_secs(settings.wait_for_finish_secs)
                .max(MIN_POLL_WAIT),
            max_wait: settings.max_wait_secs.map(Duration::from_secs),
        })
    }

    /// 拼接 API 路径，每段单独编码
    fn endpoint(&self, segments: &[&str]) -> Result<Url, PlatformError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                PlatformError::InvalidResponse(format!(
                    "Apify base URL cannot be a base: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push("v2")
            .extend(segments);
        Ok(url)
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// 启动一次运行，不等待结束
    pub async fn start_run(&self, actor_id: &str, input: &Value) -> Result<ActorRun, PlatformError> {
        // Apify addresses "username/actor-name" as "username~actor-name"
        let actor_id = actor_id.replace('/', "~");
        let url = self.endpoint(&["acts", &actor_id, "runs"])?;

        let response = self
            .authorized(self.http.post(url))
            .json(input)
            .send()
            .await?;
        let envelope: DataEnvelope<ActorRun> = parse_response(response).await?;
        Ok(envelope.data)
    }

    /// 获取运行状态，服务端最多阻塞 `wait` 后返回
    pub async fn get_run(&self, run_id: &str, wait: Duration) -> Result<ActorRun, PlatformError> {
        let url = self.endpoint(&["actor-runs", run_id])?;

        let response = self
            .authorized(self.http.get(url))
            .query(&[("waitForFinish", wait.as_secs())])
            .send()
            .await?;
        let envelope: DataEnvelope<ActorRun> = parse_response(response).await?;
        Ok(envelope.data)
    }

    /// 等待运行进入终止状态
    ///
    /// 配置了总等待上限时，超时后返回最后一次观察到的运行
    pub async fn wait_for_finish(&self, mut run: ActorRun) -> Result<ActorRun, PlatformError> {
        let started = Instant::now();

        while !run.status.is_terminal() {
            let wait = match self.max_wait {
                Some(max_wait) => {
                    let remaining = max_wait.saturating_sub(started.elapsed());
                    if remaining.is_zero() {
                        debug!(run_id = %run.id, status = %run.status, "Stopped waiting for run");
                        break;
                    }
                    remaining.min(self.wait_for_finish).max(MIN_POLL_WAIT)
                }
                None => self.wait_for_finish,
            };

            debug!(run_id = %run.id, status = %run.status, "Waiting for run to finish");
            run = self.get_run(&run.id, wait).await?;
        }

        Ok(run)
    }
}

#[async_trait]
impl ActorPlatform for ApifyClient {
    fn is_configured(&self) -> bool {
        self.token.is_some()
    }

    async fn call(&self, actor_id: &str, input: &Value) -> Result<ActorRun, PlatformError> {
        let run = self.start_run(actor_id, input).await?;
        debug!(run_id = %run.id, dataset_id = %run.default_dataset_id, "Actor run started");
        self.wait_for_finish(run).await
    }

    async fn list_items(&self, dataset_id: &str) -> Result<Vec<DatasetItem>, PlatformError> {
        let url = self.endpoint(&["datasets", dataset_id, "items"])?;

        let response = self
            .authorized(self.http.get(url))
            .query(&[("format", "json")])
            .send()
            .await?;
        parse_response(response).await
    }
}

/// 解析响应，非 2xx 转换为 `PlatformError::Api`
async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, PlatformError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(api_error(status, &body));
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| PlatformError::InvalidResponse(e.to_string()))
}

fn api_error(status: StatusCode, body: &str) -> PlatformError {
    let (error_type, message) = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => (envelope.error.error_type, envelope.error.message),
        Err(_) => (None, None),
    };

    let message = message
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| {
            format!(
                "Apify API responded with {}",
                status.canonical_reason().unwrap_or("an error")
            )
        });

    PlatformError::Api {
        status: status.as_u16(),
        error_type,
        message,
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
