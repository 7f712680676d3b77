//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（SpeechSynthesizer、ArtifactStore）
//! - convert: 转换管线编排器
//! - error: 应用层错误定义

pub mod convert;
pub mod error;
pub mod ports;

pub use convert::{ConvertSpeech, ConvertSpeechHandler, ConvertedAudio};
pub use error::ConversionError;
pub use ports::{
    ArtifactLocator, ArtifactStoreError, ArtifactStorePort, SpeechSynthesizerPort, SynthesisError,
};
