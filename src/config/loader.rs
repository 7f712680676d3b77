//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, StorageMode};
use crate::domain::voice::DEFAULT_VOICES;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `PARLANCE_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `PARLANCE_AUTH__API_SECRET=...`
/// - `PARLANCE_TTS__API_KEY=...`
/// - `PARLANCE_STORAGE__MODE=s3`
/// - `PARLANCE_STORAGE__S3__BUCKET=my-bucket`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5060)?
        .set_default("auth.api_secret", "")?
        .set_default("tts.api_key", "")?
        .set_default("tts.base_url", "https://texttospeech.googleapis.com/v1")?
        .set_default("tts.timeout_secs", 120)?
        .set_default(
            "tts.voices",
            DEFAULT_VOICES.iter().map(|v| v.to_string()).collect::<Vec<_>>(),
        )?
        .set_default("storage.mode", "local")?
        .set_default("storage.local.root", "data/audio")?
        .set_default("storage.local.mount_path", "/audio")?
        .set_default("storage.s3.bucket", "")?
        .set_default("storage.s3.signed_url_expiry_secs", 3600)?
        .set_default("log.level", "info")?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: PARLANCE_，层级分隔符: __ (双下划线)
    builder = builder.add_source(
        Environment::with_prefix("PARLANCE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    // 6. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.auth.api_secret.is_empty() {
        return Err(ConfigError::ValidationError(
            "Auth API secret cannot be empty".to_string(),
        ));
    }

    if config.tts.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS base URL cannot be empty".to_string(),
        ));
    }

    if config.tts.voices.is_empty() {
        return Err(ConfigError::ValidationError(
            "Supported voice list cannot be empty".to_string(),
        ));
    }

    match config.storage.mode {
        StorageMode::Local => {
            if config.storage.local.root.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "Local storage root cannot be empty".to_string(),
                ));
            }
            let mount = &config.storage.local.mount_path;
            if !mount.starts_with('/') || mount.trim_end_matches('/').is_empty() {
                return Err(ConfigError::ValidationError(
                    "Mount path must start with '/' and name a path segment".to_string(),
                ));
            }
        }
        StorageMode::S3 => {
            if config.storage.s3.bucket.is_empty() {
                return Err(ConfigError::ValidationError(
                    "S3 bucket cannot be empty in s3 storage mode".to_string(),
                ));
            }
            if config.storage.s3.signed_url_expiry_secs == 0 {
                return Err(ConfigError::ValidationError(
                    "Signed URL expiry cannot be 0".to_string(),
                ));
            }
        }
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志，不输出密钥）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("TTS Base URL: {}", config.tts.base_url);
    tracing::info!("TTS Timeout: {}s", config.tts.timeout_secs);
    tracing::info!("TTS Configured: {}", !config.tts.api_key.is_empty());
    tracing::info!("Voices: {}", config.tts.voices.join(", "));
    tracing::info!("Storage Mode: {:?}", config.storage.mode);
    match config.storage.mode {
        StorageMode::Local => {
            tracing::info!("Audio Root: {:?}", config.storage.local.root);
            tracing::info!("Mount Path: {}", config.storage.local.mount_path);
        }
        StorageMode::S3 => {
            tracing::info!("S3 Bucket: {}", config.storage.s3.bucket);
            tracing::info!("S3 Key Prefix: {:?}", config.storage.s3.key_prefix);
            tracing::info!(
                "Signed URL Expiry: {}s",
                config.storage.s3.signed_url_expiry_secs
            );
        }
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
