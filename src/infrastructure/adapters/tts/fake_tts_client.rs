//! Fake TTS Client - 用于测试的合成客户端
//!
//! 始终返回固定的音频字节，不实际调用外部服务。
//! 记录调用次数供测试断言副作用。

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{SpeechSynthesizerPort, SynthesisError};

/// Fake TTS Client
pub struct FakeTtsClient {
    /// 固定返回的音频字节
    audio_data: Vec<u8>,
    /// 为 true 时每次调用都返回 Provider 错误
    fail: bool,
    /// 为 false 时模拟未配置的提供方
    configured: bool,
    calls: AtomicUsize,
}

impl FakeTtsClient {
    /// 创建始终返回给定字节的客户端
    pub fn returning(audio_data: impl Into<Vec<u8>>) -> Self {
        Self {
            audio_data: audio_data.into(),
            fail: false,
            configured: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// 创建始终失败的客户端
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::returning(Vec::new())
        }
    }

    /// 创建未配置的客户端
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::returning(Vec::new())
        }
    }

    /// 已发生的合成调用次数
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpeechSynthesizerPort for FakeTtsClient {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, SynthesisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if !self.configured {
            return Err(SynthesisError::NotConfigured);
        }
        if self.fail {
            return Err(SynthesisError::Provider("fake provider failure".to_string()));
        }

        tracing::debug!(
            text_len = text.len(),
            voice = %voice,
            "FakeTtsClient: returning fixed audio"
        );

        Ok(self.audio_data.clone())
    }

    async fn health_check(&self) -> bool {
        self.configured && !self.fail
    }
}
