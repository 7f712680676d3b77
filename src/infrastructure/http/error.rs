//! HTTP Error Handling
//!
//! 将各层错误翻译为真实 HTTP 状态码，响应体统一为
//! `{"detail": "<human readable cause>"}`，不泄漏内部栈信息。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ConversionError;
use crate::auth::AuthError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 凭证缺失或无效 → 401
    Unauthorized(String),
    /// 请求校验失败 → 400
    BadRequest(String),
    /// 配置/合成/存储失败 → 500
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Unauthorized(msg) => {
                tracing::warn!(error = %msg, "Unauthorized request");
                (StatusCode::UNAUTHORIZED, msg)
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorResponse::new(detail))).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        ApiError::Unauthorized(e.to_string())
    }
}

impl From<ConversionError> for ApiError {
    fn from(e: ConversionError) -> Self {
        match e {
            ConversionError::Validation(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
