//! Data Transfer Objects
//!
//! 对外 JSON 契约采用 camelCase 字段名。

use serde::{Deserialize, Serialize};

// ============================================================================
// Convert DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    pub text: String,
    pub voice: String,
    #[serde(rename = "ownerId")]
    pub owner_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    /// 客户端可用的访问路径（本地模式为相对路径，S3 模式为预签名 URL）
    #[serde(rename = "audioUrl")]
    pub audio_url: String,
    /// 内部引用，供协作方使用
    #[serde(rename = "internalReference")]
    pub internal_reference: String,
}

// ============================================================================
// Voices / Health DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    pub voices: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(rename = "ttsService")]
    pub tts_service: &'static str,
}
