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
use tracing::error;

use crate::domain::repositories::vacancy_repository::LoadError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，统一映射为 `{"error": "..."}` 响应体
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_message = self.0.to_string();

        if let Some(load_err) = self.0.downcast_ref::<LoadError>() {
            error!(error = %load_err, "Vacancy data unavailable");
        } else {
            error!(error = %error_message, "Unhandled application error");
        }

        let body = Json(json!({ "error": error_message }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
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
