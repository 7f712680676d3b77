//! Speech Synthesizer Port - 外部 TTS 提供方抽象
//!
//! 定义语音合成的抽象接口，具体实现在 infrastructure/adapters 层。
//! 该端口不做业务校验（音色合法性由编排器负责），只负责转发
//! 外部能力并归一化其响应。

use async_trait::async_trait;
use thiserror::Error;

/// 合成错误
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// 提供方凭证未配置，调用方应快速失败而不发起网络 I/O
    #[error("TTS service not configured")]
    NotConfigured,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    /// 提供方返回非成功状态
    #[error("Provider error: {0}")]
    Provider(String),

    /// 响应缺少预期的音频载荷字段或无法解码
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Speech Synthesizer Port
///
/// 外部 TTS 提供方的抽象接口
#[async_trait]
pub trait SpeechSynthesizerPort: Send + Sync {
    /// 提供方凭证是否已配置
    ///
    /// 配置状态是端口的显式可查询属性，不从库内部状态推断。
    fn is_configured(&self) -> bool;

    /// 将文本合成为音频字节
    ///
    /// 成功时原样返回提供方的音频字节，不做转码。
    async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, SynthesisError>;

    /// 检查提供方是否可达
    async fn health_check(&self) -> bool {
        self.is_configured()
    }
}
