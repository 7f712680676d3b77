//! Configuration Types
//!
//! 定义所有配置结构体。启动时加载一次，之后不可变，
//! 请求处理逻辑不读取任何环境全局状态。

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::voice::DEFAULT_VOICES;

/// 应用主配置
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 凭证配置
    #[serde(default)]
    pub auth: AuthConfig,

    /// TTS 提供方配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5060
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 凭证配置
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AuthConfig {
    /// 受保护路由的 bearer 密钥
    #[serde(default)]
    pub api_secret: String,
}

/// TTS 提供方配置
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    /// 提供方凭证；缺失时服务可启动但合成调用快速失败
    #[serde(default)]
    pub api_key: String,

    /// 提供方 API 基础 URL
    #[serde(default = "default_tts_base_url")]
    pub base_url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_tts_timeout")]
    pub timeout_secs: u64,

    /// 支持的音色集合（列出顺序即响应顺序）
    #[serde(default = "default_voices")]
    pub voices: Vec<String>,
}

fn default_tts_base_url() -> String {
    "https://texttospeech.googleapis.com/v1".to_string()
}

fn default_tts_timeout() -> u64 {
    120
}

fn default_voices() -> Vec<String> {
    DEFAULT_VOICES.iter().map(|v| v.to_string()).collect()
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_tts_base_url(),
            timeout_secs: default_tts_timeout(),
            voices: default_voices(),
        }
    }
}

/// 存储后端选择
///
/// 进程启动时选择一次，进程生命周期内固定。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// 本地文件系统 + 静态文件托管
    Local,
    /// 对象存储 + 预签名 URL
    S3,
}

impl Default for StorageMode {
    fn default() -> Self {
        StorageMode::Local
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorageConfig {
    /// 存储模式
    #[serde(default)]
    pub mode: StorageMode,

    /// 本地模式参数
    #[serde(default)]
    pub local: LocalStorageConfig,

    /// S3 模式参数
    #[serde(default)]
    pub s3: S3StorageConfig,
}

/// 本地存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct LocalStorageConfig {
    /// 音频存储根目录
    #[serde(default = "default_audio_root")]
    pub root: PathBuf,

    /// 静态托管的 URL 挂载前缀
    #[serde(default = "default_mount_path")]
    pub mount_path: String,
}

fn default_audio_root() -> PathBuf {
    PathBuf::from("data/audio")
}

fn default_mount_path() -> String {
    "/audio".to_string()
}

impl Default for LocalStorageConfig {
    fn default() -> Self {
        Self {
            root: default_audio_root(),
            mount_path: default_mount_path(),
        }
    }
}

/// S3 存储配置
///
/// 区域与访问凭证通过标准 AWS 环境变量提供。
#[derive(Debug, Clone, Deserialize)]
pub struct S3StorageConfig {
    /// 存储桶名称
    #[serde(default)]
    pub bucket: String,

    /// 对象 key 前缀
    #[serde(default)]
    pub key_prefix: Option<String>,

    /// 预签名 URL 有效期（秒）
    #[serde(default = "default_signed_url_expiry")]
    pub signed_url_expiry_secs: u64,
}

fn default_signed_url_expiry() -> u64 {
    3600
}

impl Default for S3StorageConfig {
    fn default() -> Self {
        Self {
            bucket: String::new(),
            key_prefix: None,
            signed_url_expiry_secs: default_signed_url_expiry(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
