//! Artifact Store Port - 音频制品存储抽象
//!
//! 两个实现：本地文件系统 + 静态托管、对象存储 + 预签名 URL。
//! 进程启动时选择一次，编排器只依赖本端口。

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::AudioArtifact;

/// 已持久化制品的定位符
///
/// 由制品 ID 和归属者确定性派生，归存储实现所有。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLocator {
    /// 客户端可用的访问路径（URL 或相对路径）
    pub access_url: String,
    /// 内部引用（文件路径或对象 key），供清理与协作方使用
    pub storage_ref: String,
}

/// 存储错误
///
/// 写入失败后可能残留部分写入的文件，错误携带尝试过的
/// 内部引用以便调用方定向清理。
#[derive(Debug, Error)]
pub enum ArtifactStoreError {
    #[error("Storage I/O error: {detail}")]
    Io {
        detail: String,
        attempted_ref: Option<String>,
    },

    #[error("Failed to issue access URL: {detail}")]
    UrlIssuance {
        detail: String,
        attempted_ref: Option<String>,
    },
}

impl ArtifactStoreError {
    /// 写入失败时尝试过的内部引用（若有）
    pub fn attempted_ref(&self) -> Option<&str> {
        match self {
            ArtifactStoreError::Io { attempted_ref, .. }
            | ArtifactStoreError::UrlIssuance { attempted_ref, .. } => attempted_ref.as_deref(),
        }
    }
}

/// Artifact Store Port
#[async_trait]
pub trait ArtifactStorePort: Send + Sync {
    /// 本存储是否要求请求携带归属者
    ///
    /// 本地实现按归属者分目录，返回 true。
    fn requires_owner(&self) -> bool {
        false
    }

    /// 持久化制品并返回定位符
    ///
    /// 定位符由制品 ID 和归属者确定性派生。要么完全成功
    /// （字节落盘、定位符返回），要么失败并保证正常列举下
    /// 看不到部分制品。
    async fn save(&self, artifact: &AudioArtifact) -> Result<ArtifactLocator, ArtifactStoreError>;

    /// 删除内部引用指向的制品
    ///
    /// 制品已不存在时不算错误。
    async fn remove(&self, storage_ref: &str) -> Result<(), ArtifactStoreError>;
}
