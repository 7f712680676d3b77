//! Voices Handler - 列出支持的音色

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::VoicesResponse;
use crate::infrastructure::http::state::AppState;

/// GET /voices
///
/// 返回静态配置的音色集合，顺序稳定。
pub async fn list_voices(State(state): State<Arc<AppState>>) -> Json<VoicesResponse> {
    Json(VoicesResponse {
        voices: state.voices.names().to_vec(),
    })
}
