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

use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;

/// 环境变量前缀，例如 `ACTOR_RELAY__SERVER__PORT`
pub const ENV_PREFIX: &str = "ACTOR_RELAY";

/// 应用程序配置设置
///
/// 包含服务器、Apify 平台和可选数据存储的所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// Apify 平台配置
    pub apify: ApifySettings,
    /// 数据存储配置
    pub datastore: DatastoreSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
    /// 静态页面目录
    pub static_dir: String,
}

/// Apify 平台配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ApifySettings {
    /// API 令牌，缺失时 `/run-actor` 直接返回 500
    pub token: Option<String>,
    /// API 基础地址
    pub base_url: String,
    /// 要运行的 Actor 标识
    pub actor_id: String,
    /// 单次轮询时服务端阻塞等待的秒数（Apify 上限为 60）
    pub wait_for_finish_secs: u64,
    /// 等待运行结束的总时长上限（秒），未设置表示一直等待
    pub max_wait_secs: Option<u64>,
    /// 单个 HTTP 请求超时时间（秒）
    pub request_timeout_secs: u64,
}

/// 数据存储配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DatastoreSettings {
    /// 数据存储地址：`http(s)://` 为 Supabase REST，其余按数据库连接串处理
    pub url: Option<String>,
    /// Supabase 服务密钥
    pub key: Option<String>,
    /// REST 模式下写入的表名
    pub table: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
}

impl ApifySettings {
    /// 返回非空的 API 令牌
    pub fn token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

/// 数据存储后端类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatastoreKind {
    /// 未配置，关闭持久化
    Disabled,
    /// Supabase / PostgREST 接口
    Rest { url: String, key: String },
    /// 通过 sea-orm 直连数据库
    Sql { url: String },
}

impl DatastoreSettings {
    /// 根据地址判断使用哪种持久化后端
    ///
    /// REST 地址缺少密钥时视为未配置
    pub fn kind(&self) -> DatastoreKind {
        let url = match self.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => return DatastoreKind::Disabled,
        };

        if url.starts_with("http://") || url.starts_with("https://") {
            match self.key.as_deref().map(str::trim) {
                Some(key) if !key.is_empty() => DatastoreKind::Rest {
                    url,
                    key: key.to_string(),
                },
                _ => DatastoreKind::Disabled,
            }
        } else {
            DatastoreKind::Sql { url }
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从配置文件和进程环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// 使用给定的环境变量表加载配置
    ///
    /// `vars` 为 `None` 时读取进程环境变量。除带前缀的变量外，
    /// 还兼容 `APIFY_API_TOKEN`、`PORT`、`SUPABASE_URL`、`SUPABASE_KEY`
    /// 和 `DATABASE_URL` 这些常用名称，它们的优先级最高。
    pub fn load(vars: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let lookup = |key: &str| -> Option<String> {
            match &vars {
                Some(map) => map.get(key).cloned(),
                None => std::env::var(key).ok(),
            }
            .filter(|value| !value.trim().is_empty())
        };

        let env = lookup("APP_ENVIRONMENT").unwrap_or_else(|| "default".to_string());
        let datastore_url = lookup("SUPABASE_URL").or_else(|| lookup("DATABASE_URL"));

        let builder = Config::builder()
            // Server defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3001)?
            .set_default("server.static_dir", "public")?
            // Apify defaults
            .set_default("apify.base_url", "https://api.apify.com")?
            .set_default("apify.actor_id", "Wpp1BZ6yGWjySadk3")?
            .set_default("apify.wait_for_finish_secs", 60)?
            .set_default("apify.request_timeout_secs", 120)?
            // Datastore defaults
            .set_default("datastore.table", "actor_runs")?
            .set_default("datastore.max_connections", 10)?
            .set_default("datastore.connect_timeout", 10)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(vars.clone()),
            )
            .set_override_option("apify.token", lookup("APIFY_API_TOKEN"))?
            .set_override_option("server.port", lookup("PORT"))?
            .set_override_option("datastore.url", datastore_url)?
            .set_override_option("datastore.key", lookup("SUPABASE_KEY"))?;

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
