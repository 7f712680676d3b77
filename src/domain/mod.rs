//! Domain Layer - 领域层
//!
//! 包含:
//! - voice: 支持音色目录
//! - artifact: 音频制品值对象

pub mod artifact;
pub mod voice;

pub use artifact::{AudioArtifact, AudioFormat};
pub use voice::VoiceCatalog;
