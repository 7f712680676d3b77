//! Health Handler - 合成服务健康检查

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::HealthResponse;
use crate::infrastructure::http::state::AppState;

/// GET /health
///
/// 凭证通过后始终返回 200，状态字段反映合成端口是否
/// 已配置且可达。
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (status, tts_service) = if !state.synthesizer.is_configured() {
        ("unhealthy", "api_key_missing")
    } else if state.synthesizer.health_check().await {
        ("healthy", "configured")
    } else {
        ("unhealthy", "configured_but_unreachable")
    };

    Json(HealthResponse {
        status,
        tts_service,
    })
}
