//! Application State
//!
//! 进程级不可变状态：端口、转换处理器、音色目录与凭证密钥。
//! 启动时构建一次，请求处理期间只读。

use std::sync::Arc;

use crate::application::{ArtifactStorePort, ConvertSpeechHandler, SpeechSynthesizerPort};
use crate::domain::VoiceCatalog;

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub synthesizer: Arc<dyn SpeechSynthesizerPort>,
    pub artifact_store: Arc<dyn ArtifactStorePort>,

    // ========== Handlers ==========
    pub convert_handler: ConvertSpeechHandler,

    // ========== 静态配置 ==========
    pub voices: Arc<VoiceCatalog>,
    pub api_secret: String,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizerPort>,
        artifact_store: Arc<dyn ArtifactStorePort>,
        voices: VoiceCatalog,
        api_secret: impl Into<String>,
    ) -> Self {
        let voices = Arc::new(voices);
        Self {
            convert_handler: ConvertSpeechHandler::new(
                synthesizer.clone(),
                artifact_store.clone(),
                voices.clone(),
            ),
            synthesizer,
            artifact_store,
            voices,
            api_secret: api_secret.into(),
        }
    }
}
