//! S3 Artifact Store - 对象存储制品存储
//!
//! 实现 ArtifactStorePort trait。字节写入对象存储后签发
//! 限时 GET 预签名 URL 作为访问路径。区域与访问凭证由标准
//! AWS 环境变量提供。

use async_trait::async_trait;
use http::Method;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path as ObjectPath;
use object_store::signer::Signer;
use object_store::{Error as ObjectStoreError, ObjectStore, PutPayload};
use std::time::Duration;

use crate::application::ports::{ArtifactLocator, ArtifactStoreError, ArtifactStorePort};
use crate::config::S3StorageConfig;
use crate::domain::AudioArtifact;

/// 对象存储制品存储
pub struct S3ArtifactStore {
    store: AmazonS3,
    key_prefix: Option<String>,
    signed_url_expiry: Duration,
}

impl S3ArtifactStore {
    /// 从已构建的 S3 客户端创建
    pub fn new(store: AmazonS3, key_prefix: Option<String>, signed_url_expiry: Duration) -> Self {
        Self {
            store,
            key_prefix,
            signed_url_expiry,
        }
    }

    /// 从配置创建，凭证取自标准 AWS 环境变量
    pub fn from_config(config: &S3StorageConfig) -> Result<Self, ArtifactStoreError> {
        let store = AmazonS3Builder::from_env()
            .with_bucket_name(&config.bucket)
            .build()
            .map_err(|e| ArtifactStoreError::Io {
                detail: format!("Failed to build S3 client: {}", e),
                attempted_ref: None,
            })?;

        Ok(Self::new(
            store,
            config.key_prefix.clone(),
            Duration::from_secs(config.signed_url_expiry_secs),
        ))
    }

    /// 构建对象 key: `[prefix/][owner/]{uuid}.wav`
    fn object_key(&self, artifact: &AudioArtifact) -> String {
        let mut segments: Vec<&str> = Vec::new();

        let prefix = self
            .key_prefix
            .as_deref()
            .map(|p| p.trim_end_matches('/'))
            .filter(|p| !p.trim().is_empty());
        if let Some(prefix) = prefix {
            segments.push(prefix);
        }
        if let Some(owner) = artifact.owner.as_deref() {
            segments.push(owner);
        }

        let file_name = artifact.file_name();
        segments.push(&file_name);
        segments.join("/")
    }
}

#[async_trait]
impl ArtifactStorePort for S3ArtifactStore {
    async fn save(&self, artifact: &AudioArtifact) -> Result<ArtifactLocator, ArtifactStoreError> {
        let key = self.object_key(artifact);

        let path = ObjectPath::parse(&key).map_err(|e| ArtifactStoreError::Io {
            detail: format!("Invalid object key: {}", e),
            attempted_ref: None,
        })?;

        self.store
            .put(&path, PutPayload::from(artifact.bytes.clone()))
            .await
            .map_err(|e| ArtifactStoreError::Io {
                detail: e.to_string(),
                attempted_ref: Some(key.clone()),
            })?;

        let url = self
            .store
            .signed_url(Method::GET, &path, self.signed_url_expiry)
            .await
            .map_err(|e| ArtifactStoreError::UrlIssuance {
                detail: e.to_string(),
                attempted_ref: Some(key.clone()),
            })?;

        tracing::debug!(
            key = %key,
            size = artifact.bytes.len(),
            expiry_secs = self.signed_url_expiry.as_secs(),
            "Uploaded audio artifact and issued signed URL"
        );

        Ok(ArtifactLocator {
            access_url: url.to_string(),
            storage_ref: key,
        })
    }

    async fn remove(&self, storage_ref: &str) -> Result<(), ArtifactStoreError> {
        let path = ObjectPath::parse(storage_ref).map_err(|e| ArtifactStoreError::Io {
            detail: format!("Invalid object key: {}", e),
            attempted_ref: Some(storage_ref.to_string()),
        })?;

        match self.store.delete(&path).await {
            Ok(()) => {
                tracing::debug!(key = %storage_ref, "Deleted audio artifact object");
                Ok(())
            }
            // 对象已不存在视为成功
            Err(ObjectStoreError::NotFound { .. }) => Ok(()),
            Err(e) => Err(ArtifactStoreError::Io {
                detail: e.to_string(),
                attempted_ref: Some(storage_ref.to_string()),
            }),
        }
    }
}
