//! Convert Speech - 转换管线编排器
//!
//! 每个请求的状态机: Validating → Synthesizing → Persisting → Succeeded，
//! 任一阶段失败即终止并带阶段上下文上抛。字节生成之后的任何失败
//! 都必须先清理部分写入的制品再上抛——失败的请求不得留下制品。

use std::sync::Arc;

use crate::application::error::ConversionError;
use crate::application::ports::{ArtifactStorePort, SpeechSynthesizerPort};
use crate::domain::{AudioArtifact, VoiceCatalog};

/// 转换命令
#[derive(Debug, Clone)]
pub struct ConvertSpeech {
    /// 要合成的文本
    pub text: String,
    /// 目标音色，必须是目录成员
    pub voice: String,
    /// 归属者；本地存储模式下必填
    pub owner: Option<String>,
}

/// 转换结果
#[derive(Debug, Clone)]
pub struct ConvertedAudio {
    /// 客户端可用的访问路径
    pub audio_url: String,
    /// 内部引用（文件路径或对象 key），供协作方使用
    pub storage_ref: String,
}

/// 归属者必须是安全的单个路径段
///
/// 本地模式下归属者直接进入目录名，拒绝路径穿越。
fn is_safe_owner(owner: &str) -> bool {
    !owner.is_empty() && !owner.contains("..") && !owner.contains('/')
}

/// 转换管线处理器
///
/// 每个请求独立执行：合成调用严格先于存储调用，无共享可变状态。
/// 每次调用分配全新制品 ID，不做去重。
pub struct ConvertSpeechHandler {
    synthesizer: Arc<dyn SpeechSynthesizerPort>,
    artifact_store: Arc<dyn ArtifactStorePort>,
    voices: Arc<VoiceCatalog>,
}

impl ConvertSpeechHandler {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizerPort>,
        artifact_store: Arc<dyn ArtifactStorePort>,
        voices: Arc<VoiceCatalog>,
    ) -> Self {
        Self {
            synthesizer,
            artifact_store,
            voices,
        }
    }

    /// 执行转换管线
    pub async fn handle(&self, command: ConvertSpeech) -> Result<ConvertedAudio, ConversionError> {
        // ===== Validating =====
        // 廉价拒绝全部发生在任何外部调用之前
        self.validate(&command)?;

        tracing::info!(
            voice = %command.voice,
            owner = ?command.owner,
            text_len = command.text.len(),
            "Starting speech conversion"
        );

        // ===== Synthesizing =====
        // 此阶段失败时尚无制品，无需清理
        let bytes = self
            .synthesizer
            .synthesize(&command.text, &command.voice)
            .await
            .map_err(|e| {
                tracing::error!(
                    stage = "synthesis",
                    voice = %command.voice,
                    owner = ?command.owner,
                    cause = %e,
                    "Speech conversion failed"
                );
                ConversionError::from(e)
            })?;

        let artifact = AudioArtifact::new(command.owner.clone(), bytes);

        // ===== Persisting =====
        match self.artifact_store.save(&artifact).await {
            Ok(locator) => {
                tracing::info!(
                    artifact_id = %artifact.id,
                    storage_ref = %locator.storage_ref,
                    size = artifact.bytes.len(),
                    "Speech conversion succeeded"
                );
                Ok(ConvertedAudio {
                    audio_url: locator.access_url,
                    storage_ref: locator.storage_ref,
                })
            }
            Err(e) => {
                tracing::error!(
                    stage = "persist",
                    artifact_id = %artifact.id,
                    owner = ?command.owner,
                    cause = %e,
                    "Speech conversion failed"
                );
                // save 报告失败后仍可能存在部分写入，
                // 定向清理尝试过的引用；清理失败只记录，不覆盖原始错误
                if let Some(attempted) = e.attempted_ref() {
                    if let Err(cleanup_err) = self.artifact_store.remove(attempted).await {
                        tracing::warn!(
                            storage_ref = %attempted,
                            cause = %cleanup_err,
                            "Failed to clean up partial artifact"
                        );
                    } else {
                        tracing::info!(storage_ref = %attempted, "Cleaned up partial artifact");
                    }
                }
                Err(ConversionError::from(e))
            }
        }
    }

    /// 请求校验，全部在外部调用之前
    fn validate(&self, command: &ConvertSpeech) -> Result<(), ConversionError> {
        if !self.synthesizer.is_configured() {
            return Err(ConversionError::NotConfigured);
        }

        if command.text.is_empty() {
            return Err(ConversionError::validation("Text cannot be empty"));
        }

        if !self.voices.contains(&command.voice) {
            return Err(ConversionError::validation(format!(
                "Target voice not supported. Choose from: {}",
                self.voices.names().join(", ")
            )));
        }

        match &command.owner {
            None if self.artifact_store.requires_owner() => {
                return Err(ConversionError::validation("ownerId is required"));
            }
            Some(owner) if !is_safe_owner(owner) => {
                return Err(ConversionError::validation("Invalid ownerId format"));
            }
            _ => {}
        }

        Ok(())
    }
}
