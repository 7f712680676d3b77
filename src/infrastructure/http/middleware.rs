//! HTTP Middleware
//!
//! - 凭证校验中间件：所有受保护路由在任何处理逻辑之前先经过
//!   此处，校验失败直接返回 401，不产生任何副作用
//! - HTTP 状态码错误日志中间件：4xx/5xx 响应带 method/uri 记录

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use super::error::ApiError;
use super::state::AppState;
use crate::auth::verify_bearer;

/// 凭证校验中间件
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok());

    match verify_bearer(header, &state.api_secret) {
        Ok(_) => Ok(next.run(request).await),
        Err(e) => {
            tracing::warn!(
                method = %request.method(),
                path = %request.uri().path(),
                "Credential verification failed: {}",
                e
            );
            Err(ApiError::from(e))
        }
    }
}

/// HTTP 状态码错误日志中间件
///
/// 拦截 HTTP 响应，当状态码为 4xx 或 5xx 时记录日志。
/// 覆盖不经过 ApiError 的失败（请求体解析拒绝、静态托管 404 等）。
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    async fn ok_handler() -> &'static str {
        "OK"
    }

    async fn not_found_handler() -> StatusCode {
        StatusCode::NOT_FOUND
    }

    async fn error_handler() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/ok", get(ok_handler))
            .route("/not-found", get(not_found_handler))
            .route("/error", get(error_handler))
            .layer(axum::middleware::from_fn(error_logging_middleware))
    }

    #[tokio::test]
    async fn test_ok_response_passes_through() {
        let app = create_test_router();
        let request = HttpRequest::builder()
            .uri("/ok")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_client_error_logs_warning() {
        let app = create_test_router();
        let request = HttpRequest::builder()
            .uri("/not-found")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_server_error_logs_error() {
        let app = create_test_router();
        let request = HttpRequest::builder()
            .uri("/error")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
