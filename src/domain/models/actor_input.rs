// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

const DEFAULT_URLS: [&str; 3] = [
    "https://www.linkedin.com/posts/linkedin_no-is-a-complete-sentence-activity-7247998907798978560-J_hB?utm_source=share&utm_medium=member_desktop",
    "https://www.linkedin.com/company/amazon",
    "https://www.linkedin.com/search/results/content/?datePosted=%22past-24h%22&keywords=ai&origin=FACETED_SEARCH",
];

/// Actor 输入
///
/// 浏览器表单提交的抓取参数，按原样保存的 JSON 对象。
/// 字段类型不做校验，由 Actor 自身的输入模式负责。
/// 下面的访问方法只用于读取和日志。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorInput(Map<String, Value>);

impl ActorInput {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// 请求体为空时使用的默认输入
    pub fn default_input() -> Self {
        let mut fields = Map::new();
        fields.insert("urls".to_string(), json!(DEFAULT_URLS));
        fields.insert("limitPerSource".to_string(), json!(10));
        fields.insert("deepScrape".to_string(), json!(true));
        fields.insert("rawData".to_string(), json!(false));
        Self(fields)
    }

    /// 判断输入是否不含任何字段
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// `urls` 中的字符串地址，非数组时为空
    pub fn urls(&self) -> Vec<&str> {
        self.get("urls")
            .and_then(Value::as_array)
            .map(|urls| urls.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn limit_per_source(&self) -> Option<i64> {
        self.get("limitPerSource").and_then(Value::as_i64)
    }

    pub fn deep_scrape(&self) -> Option<bool> {
        self.get("deepScrape").and_then(Value::as_bool)
    }

    pub fn raw_data(&self) -> Option<bool> {
        self.get("rawData").and_then(Value::as_bool)
    }

    /// 转换为发送给平台的 JSON 对象
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}
