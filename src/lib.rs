//! Parlance - 文本转语音 HTTP 服务
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Voice Catalog: 支持音色目录
//! - Audio Artifact: 音频制品值对象
//!
//! 应用层 (application/):
//! - Ports: 端口定义（SpeechSynthesizer, ArtifactStore）
//! - Convert: 转换管线编排器（校验 → 合成 → 持久化 → 失败清理）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + 凭证校验中间件 + 静态制品托管
//! - Adapters: HTTP TTS Client, 本地/S3 制品存储
//!
//! 横切 (auth/, config/):
//! - auth: Bearer 凭证校验（纯函数）
//! - config: 多源配置加载

pub mod application;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
