//! Audio Artifact - 音频制品值对象
//!
//! 一次合成调用产生恰好一个制品，创建后不可变。
//! 生命周期内的删除仅发生在持久化失败后的清理路径。

use uuid::Uuid;

/// 音频输出格式
///
/// 本设计固定为 WAV，合成输出不做转码。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Wav,
}

impl AudioFormat {
    /// 文件扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Wav => "wav",
        }
    }
}

/// 音频制品
///
/// 每次请求分配全新 UUID，重复请求产生不同制品（不做去重）。
#[derive(Debug, Clone)]
pub struct AudioArtifact {
    /// 制品唯一标识
    pub id: Uuid,
    /// 归属者（本地存储模式下作为目录分组键）
    pub owner: Option<String>,
    /// 合成器返回的原始音频字节
    pub bytes: Vec<u8>,
    /// 输出格式
    pub format: AudioFormat,
}

impl AudioArtifact {
    /// 为一次成功的合成创建制品
    pub fn new(owner: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            bytes,
            format: AudioFormat::Wav,
        }
    }

    /// 制品文件名，如 `550e8400-....wav`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.id, self.format.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_id_per_artifact() {
        let a = AudioArtifact::new(None, vec![1, 2, 3]);
        let b = AudioArtifact::new(None, vec![1, 2, 3]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_file_name_has_wav_extension() {
        let artifact = AudioArtifact::new(Some("user1".to_string()), vec![]);
        assert!(artifact.file_name().ends_with(".wav"));
        assert!(artifact.file_name().starts_with(&artifact.id.to_string()));
    }
}
