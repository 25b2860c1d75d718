// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::usecases::run_actor::RunActorError;
use crate::domain::services::actor_platform::PlatformError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，统一转换为 `{"error": ...}` 响应
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    /// 错误对应的HTTP状态码
    pub fn status(&self) -> StatusCode {
        match self.0.downcast_ref::<RunActorError>() {
            Some(RunActorError::NotConfigured) => StatusCode::INTERNAL_SERVER_ERROR,
            Some(RunActorError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            Some(RunActorError::Platform(e)) => e
                .status_code()
                .and_then(|code| StatusCode::from_u16(code).ok())
                .filter(|status| status.is_client_error() || status.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = self.0.to_string();

        let body = match self.0.downcast_ref::<RunActorError>() {
            Some(RunActorError::Platform(PlatformError::Api { error_type, .. })) => json!({
                "error": error_message,
                "details": {
                    "type": error_type,
                    "statusCode": status.as_u16(),
                }
            }),
            _ => json!({ "error": error_message }),
        };

        (status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
