//! Parlance - 文本转语音 HTTP 服务
//!
//! 启动流程: 加载配置 → 初始化日志 → 按存储模式装配端口 →
//! 启动 HTTP 服务器（带优雅关闭）

use std::sync::Arc;

use parlance::application::ArtifactStorePort;
use parlance::config::{load_config, print_config, StorageMode};
use parlance::domain::VoiceCatalog;
use parlance::infrastructure::adapters::{
    HttpTtsClient, HttpTtsClientConfig, LocalArtifactStore, S3ArtifactStore,
};
use parlance::infrastructure::http::{AppState, HttpServer, ServerConfig, StaticAudioFiles};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},parlance={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Parlance - 文本转语音服务");
    print_config(&config);

    if config.tts.api_key.is_empty() {
        tracing::warn!("TTS API key not configured, synthesis requests will fail");
    }

    // 创建 TTS 客户端
    let tts_config = HttpTtsClientConfig {
        api_key: config.tts.api_key.clone(),
        base_url: config.tts.base_url.clone(),
        timeout_secs: config.tts.timeout_secs,
    };
    let synthesizer = Arc::new(
        HttpTtsClient::new(tts_config)
            .map_err(|e| anyhow::anyhow!("Failed to create TTS client: {}", e))?,
    );

    // 按存储模式装配制品存储；本地模式同时开启静态托管
    let (artifact_store, static_audio): (Arc<dyn ArtifactStorePort>, Option<StaticAudioFiles>) =
        match config.storage.mode {
            StorageMode::Local => {
                let local = &config.storage.local;
                let store = LocalArtifactStore::new(&local.root, &local.mount_path)
                    .await
                    .map_err(|e| anyhow::anyhow!("Failed to init local storage: {}", e))?;
                let static_audio = StaticAudioFiles {
                    mount_path: local.mount_path.trim_end_matches('/').to_string(),
                    root: local.root.clone(),
                };
                (Arc::new(store), Some(static_audio))
            }
            StorageMode::S3 => {
                let store = S3ArtifactStore::from_config(&config.storage.s3)
                    .map_err(|e| anyhow::anyhow!("Failed to init S3 storage: {}", e))?;
                (Arc::new(store), None)
            }
        };

    // 创建应用状态
    let state = AppState::new(
        synthesizer,
        artifact_store,
        VoiceCatalog::new(config.tts.voices.clone()),
        config.auth.api_secret.clone(),
    );

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state, static_audio);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
