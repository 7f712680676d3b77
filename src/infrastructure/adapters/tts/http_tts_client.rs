//! HTTP TTS Client - 调用外部 TTS 提供方
//!
//! 实现 SpeechSynthesizerPort trait，通过 HTTP 调用云端合成服务
//!
//! 外部 TTS API:
//! POST {base_url}/text:synthesize?key={api_key}
//! Request: {"input":{"text":...},"voice":{"name":...},"audioConfig":{"audioEncoding":"LINEAR16"}}  (JSON)
//! Response: {"audioContent": "<base64 WAV bytes>"}

use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{SpeechSynthesizerPort, SynthesisError};

/// 合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct SynthesizeHttpRequest {
    input: SynthesisInput,
    voice: VoiceSelection,
    #[serde(rename = "audioConfig")]
    audio_config: AudioConfig,
}

#[derive(Debug, Serialize)]
struct SynthesisInput {
    text: String,
}

#[derive(Debug, Serialize)]
struct VoiceSelection {
    name: String,
    #[serde(rename = "languageCode")]
    language_code: String,
}

#[derive(Debug, Serialize)]
struct AudioConfig {
    #[serde(rename = "audioEncoding")]
    audio_encoding: &'static str,
}

/// 合成响应体 (JSON)
#[derive(Debug, Deserialize)]
struct SynthesizeHttpResponse {
    #[serde(rename = "audioContent")]
    audio_content: Option<String>,
}

/// HTTP TTS 客户端配置
#[derive(Debug, Clone)]
pub struct HttpTtsClientConfig {
    /// 提供方凭证；为空表示未配置
    pub api_key: String,
    /// 提供方 API 基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpTtsClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://texttospeech.googleapis.com/v1".to_string(),
            timeout_secs: 120,
        }
    }
}

impl HttpTtsClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP TTS 客户端
///
/// 未配置凭证时所有合成调用快速失败，不发起网络 I/O。
pub struct HttpTtsClient {
    client: Client,
    config: HttpTtsClientConfig,
}

impl HttpTtsClient {
    /// 创建新的 HTTP TTS 客户端
    pub fn new(config: HttpTtsClientConfig) -> Result<Self, SynthesisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SynthesisError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取合成 URL
    fn synthesize_url(&self) -> String {
        format!(
            "{}/text:synthesize?key={}",
            self.config.base_url, self.config.api_key
        )
    }

    /// 获取健康检查 URL
    fn health_url(&self) -> String {
        format!("{}/voices?key={}", self.config.base_url, self.config.api_key)
    }
}

#[async_trait]
impl SpeechSynthesizerPort for HttpTtsClient {
    fn is_configured(&self) -> bool {
        !self.config.api_key.is_empty()
    }

    async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, SynthesisError> {
        if !self.is_configured() {
            return Err(SynthesisError::NotConfigured);
        }

        let http_request = SynthesizeHttpRequest {
            input: SynthesisInput {
                text: text.to_string(),
            },
            voice: VoiceSelection {
                name: voice.to_string(),
                language_code: "en-US".to_string(),
            },
            audio_config: AudioConfig {
                audio_encoding: "LINEAR16",
            },
        };

        tracing::debug!(
            text_len = text.len(),
            voice = %voice,
            "Sending TTS synthesize request"
        );

        let response = self
            .client
            .post(self.synthesize_url())
            .json(&http_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SynthesisError::Timeout
                } else if e.is_connect() {
                    SynthesisError::NetworkError(format!("Cannot connect to TTS service: {}", e))
                } else {
                    SynthesisError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SynthesisError::Provider(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: SynthesizeHttpResponse = response
            .json()
            .await
            .map_err(|e| SynthesisError::InvalidResponse(format!("Failed to parse body: {}", e)))?;

        let encoded = body.audio_content.ok_or_else(|| {
            SynthesisError::InvalidResponse("Response missing audioContent".to_string())
        })?;

        let audio_data = base64::engine::general_purpose::STANDARD
            .decode(encoded.as_bytes())
            .map_err(|e| {
                SynthesisError::InvalidResponse(format!("Failed to decode audioContent: {}", e))
            })?;

        tracing::info!(
            voice = %voice,
            audio_size = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }

    async fn health_check(&self) -> bool {
        if !self.is_configured() {
            return false;
        }

        match self
            .client
            .get(self.health_url())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
