// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::Value;

use crate::application::usecases::run_actor::RunActorError;
use crate::domain::models::actor_input::ActorInput;

/// 解析 `/run-actor` 请求体
///
/// 空请求体、`null`、`{}` 和 `[]` 都视为未提供输入，由用例替换为默认输入。
/// 对象字段不做类型校验，原样转发。
///
/// # 返回值
///
/// * `Ok(Some(ActorInput))` - 提供了输入
/// * `Ok(None)` - 未提供输入
/// * `Err(RunActorError::InvalidInput)` - 不是合法的 JSON 对象
pub fn parse_body(body: &[u8]) -> Result<Option<ActorInput>, RunActorError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| RunActorError::InvalidInput(format!("Invalid JSON body: {}", e)))?;

    match value {
        Value::Null => Ok(None),
        Value::Array(items) if items.is_empty() => Ok(None),
        Value::Object(fields) if fields.is_empty() => Ok(None),
        Value::Object(fields) => Ok(Some(ActorInput::new(fields))),
        _ => Err(RunActorError::InvalidInput(
            "Request body must be a JSON object".to_string(),
        )),
    }
}
