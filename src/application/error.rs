//! 应用层错误定义
//!
//! 转换管线的错误分类。每个分类携带足够的上下文供
//! HTTP 层翻译状态码、供编排器决定是否需要清理。

use thiserror::Error;

use super::ports::{ArtifactStoreError, SynthesisError};

/// 转换管线错误
#[derive(Debug, Error)]
pub enum ConversionError {
    /// 提供方未配置（进程级配置缺陷，HTTP 500）
    #[error("TTS service not configured (missing provider API key)")]
    NotConfigured,

    /// 请求校验失败（HTTP 400）
    #[error("Validation error: {0}")]
    Validation(String),

    /// 外部合成能力失败（HTTP 500）
    #[error("Speech synthesis failed: {0}")]
    Synthesis(String),

    /// 持久化或 URL 签发失败（HTTP 500）
    #[error("Artifact storage failed: {0}")]
    Storage(String),
}

impl ConversionError {
    /// 创建校验错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<SynthesisError> for ConversionError {
    fn from(err: SynthesisError) -> Self {
        match err {
            SynthesisError::NotConfigured => Self::NotConfigured,
            other => Self::Synthesis(other.to_string()),
        }
    }
}

impl From<ArtifactStoreError> for ConversionError {
    fn from(err: ArtifactStoreError) -> Self {
        Self::Storage(err.to_string())
    }
}
