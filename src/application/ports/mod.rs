//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod artifact_store;
mod synthesizer;

pub use artifact_store::{ArtifactLocator, ArtifactStoreError, ArtifactStorePort};
pub use synthesizer::{SpeechSynthesizerPort, SynthesisError};
