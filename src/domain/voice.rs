//! Voice Catalog - 支持音色目录
//!
//! 静态配置的音色集合，顺序稳定。请求中的 voice 必须是目录成员。

/// 默认音色集合
pub const DEFAULT_VOICES: &[&str] = &["echo", "alloy", "fable", "onyx", "nova", "shimmer"];

/// 支持音色目录
///
/// 启动时从配置构建，之后不可变。列出顺序与配置顺序一致。
#[derive(Debug, Clone)]
pub struct VoiceCatalog {
    voices: Vec<String>,
}

impl VoiceCatalog {
    /// 从音色名称列表构建目录
    pub fn new(voices: Vec<String>) -> Self {
        Self { voices }
    }

    /// 使用默认音色集合构建
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_VOICES.iter().map(|v| v.to_string()).collect())
    }

    /// 检查音色是否受支持
    pub fn contains(&self, voice: &str) -> bool {
        self.voices.iter().any(|v| v == voice)
    }

    /// 按配置顺序列出所有音色
    pub fn names(&self) -> &[String] {
        &self.voices
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }
}

impl Default for VoiceCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}
