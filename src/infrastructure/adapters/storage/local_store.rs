//! Local Artifact Store - 本地文件系统制品存储
//!
//! 实现 ArtifactStorePort trait。按归属者分子目录写入，
//! 访问路径由静态托管的挂载前缀拼出。

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{ArtifactLocator, ArtifactStoreError, ArtifactStorePort};
use crate::domain::AudioArtifact;

/// 本地文件系统制品存储
pub struct LocalArtifactStore {
    /// 存储根目录
    root: PathBuf,
    /// 静态托管挂载前缀，如 `/audio`
    mount_path: String,
}

impl LocalArtifactStore {
    /// 创建新的本地存储，确保根目录存在
    pub async fn new(
        root: impl AsRef<Path>,
        mount_path: impl Into<String>,
    ) -> Result<Self, ArtifactStoreError> {
        let root = root.as_ref().to_path_buf();

        fs::create_dir_all(&root).await.map_err(|e| ArtifactStoreError::Io {
            detail: e.to_string(),
            attempted_ref: None,
        })?;

        Ok(Self {
            root,
            mount_path: mount_path.into().trim_end_matches('/').to_string(),
        })
    }

    /// 获取存储根目录
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ArtifactStorePort for LocalArtifactStore {
    fn requires_owner(&self) -> bool {
        true
    }

    async fn save(&self, artifact: &AudioArtifact) -> Result<ArtifactLocator, ArtifactStoreError> {
        let owner = artifact.owner.as_deref().ok_or_else(|| ArtifactStoreError::Io {
            detail: "Local storage requires an owner".to_string(),
            attempted_ref: None,
        })?;

        let owner_dir = self.root.join(owner);

        // 目录创建幂等，同归属者的并发请求在此竞态是安全的
        fs::create_dir_all(&owner_dir)
            .await
            .map_err(|e| ArtifactStoreError::Io {
                detail: e.to_string(),
                attempted_ref: None,
            })?;

        let file_name = artifact.file_name();
        let file_path = owner_dir.join(&file_name);
        let storage_ref = file_path.to_string_lossy().to_string();

        fs::write(&file_path, &artifact.bytes)
            .await
            .map_err(|e| ArtifactStoreError::Io {
                detail: e.to_string(),
                attempted_ref: Some(storage_ref.clone()),
            })?;

        tracing::debug!(
            path = %storage_ref,
            size = artifact.bytes.len(),
            "Saved audio artifact"
        );

        Ok(ArtifactLocator {
            access_url: format!("{}/{}/{}", self.mount_path, owner, file_name),
            storage_ref,
        })
    }

    async fn remove(&self, storage_ref: &str) -> Result<(), ArtifactStoreError> {
        // 文件已不存在视为成功；不做先检查后删除，避免与并发删除竞态
        match fs::remove_file(Path::new(storage_ref)).await {
            Ok(()) => {
                tracing::debug!(path = %storage_ref, "Deleted audio artifact");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ArtifactStoreError::Io {
                detail: e.to_string(),
                attempted_ref: Some(storage_ref.to_string()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn artifact(owner: &str, bytes: &[u8]) -> AudioArtifact {
        AudioArtifact::new(Some(owner.to_string()), bytes.to_vec())
    }

    #[tokio::test]
    async fn test_save_writes_file_and_builds_access_url() {
        let temp_dir = tempdir().unwrap();
        let store = LocalArtifactStore::new(temp_dir.path(), "/audio").await.unwrap();

        let artifact = artifact("user1", b"fake wav data");
        let locator = store.save(&artifact).await.unwrap();

        assert_eq!(
            locator.access_url,
            format!("/audio/user1/{}", artifact.file_name())
        );
        let written = fs::read(&locator.storage_ref).await.unwrap();
        assert_eq!(written, b"fake wav data");
    }

    #[tokio::test]
    async fn test_directory_creation_is_idempotent() {
        let temp_dir = tempdir().unwrap();
        let store = LocalArtifactStore::new(temp_dir.path(), "/audio").await.unwrap();

        // 同归属者保存两次，目录已存在不报错
        store.save(&artifact("user1", b"a")).await.unwrap();
        store.save(&artifact("user1", b"b")).await.unwrap();
    }

    #[tokio::test]
    async fn test_distinct_artifacts_get_distinct_paths() {
        let temp_dir = tempdir().unwrap();
        let store = LocalArtifactStore::new(temp_dir.path(), "/audio").await.unwrap();

        let a = store.save(&artifact("user1", b"a")).await.unwrap();
        let b = store.save(&artifact("user1", b"b")).await.unwrap();
        assert_ne!(a.storage_ref, b.storage_ref);
    }

    #[tokio::test]
    async fn test_remove_deletes_file() {
        let temp_dir = tempdir().unwrap();
        let store = LocalArtifactStore::new(temp_dir.path(), "/audio").await.unwrap();

        let locator = store.save(&artifact("user1", b"a")).await.unwrap();
        store.remove(&locator.storage_ref).await.unwrap();
        assert!(!Path::new(&locator.storage_ref).exists());
    }

    #[tokio::test]
    async fn test_remove_absent_file_is_noop() {
        let temp_dir = tempdir().unwrap();
        let store = LocalArtifactStore::new(temp_dir.path(), "/audio").await.unwrap();

        let missing = temp_dir.path().join("user1/missing.wav");
        store
            .remove(&missing.to_string_lossy())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_save_without_owner_fails() {
        let temp_dir = tempdir().unwrap();
        let store = LocalArtifactStore::new(temp_dir.path(), "/audio").await.unwrap();

        let artifact = AudioArtifact::new(None, b"a".to_vec());
        assert!(store.save(&artifact).await.is_err());
    }

    #[tokio::test]
    async fn test_mount_path_trailing_slash_normalized() {
        let temp_dir = tempdir().unwrap();
        let store = LocalArtifactStore::new(temp_dir.path(), "/audio/").await.unwrap();

        let artifact = artifact("user1", b"a");
        let locator = store.save(&artifact).await.unwrap();
        assert!(locator.access_url.starts_with("/audio/user1/"));
    }
}
