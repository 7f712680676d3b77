//! Convert Handler - 文本转语音

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::ConvertSpeech;
use crate::infrastructure::http::dto::{ConvertRequest, ConvertResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /convert
///
/// 单次同步转换：文本 + 音色 → 可访问的音频 URL。
pub async fn convert(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let command = ConvertSpeech {
        text: req.text,
        voice: req.voice,
        owner: req.owner_id,
    };

    let result = state.convert_handler.handle(command).await?;

    Ok(Json(ConvertResponse {
        audio_url: result.audio_url,
        internal_reference: result.storage_ref,
    }))
}
