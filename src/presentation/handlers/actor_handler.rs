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

use axum::{body::Bytes, extract::Extension, Json};
use std::sync::Arc;

use crate::{
    application::{
        dto::{run_actor_request, run_actor_response::RunActorResponseDto},
        usecases::run_actor::RunActorUseCase,
    },
    presentation::errors::AppError,
};

/// 运行 Actor 并返回数据集
///
/// 请求体按原始字节读取，空请求体与 `{}` 一样使用默认输入
pub async fn run_actor(
    Extension(use_case): Extension<Arc<RunActorUseCase>>,
    body: Bytes,
) -> Result<Json<RunActorResponseDto>, AppError> {
    let input = run_actor_request::parse_body(&body)?;
    let response = use_case.execute(input).await?;
    Ok(Json(response))
}
