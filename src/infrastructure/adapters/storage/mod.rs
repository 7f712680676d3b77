//! Storage Adapters - 制品存储端口实现
//!
//! - local_store: 本地文件系统 + 静态托管
//! - s3_store: 对象存储 + 预签名 URL

mod local_store;
mod s3_store;

pub use local_store::LocalArtifactStore;
pub use s3_store::S3ArtifactStore;
