//! HTTP Routes
//!
//! API Endpoints:
//! - /convert   POST  文本转语音（需凭证）
//! - /voices    GET   列出支持音色（需凭证）
//! - /health    GET   合成服务健康检查（需凭证）
//! - /{mount}/* GET   本地模式下静态托管制品（只读，无额外访问控制，
//!                    信任边界由托管环境负责）

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;

use super::handlers;
use super::middleware::auth_middleware;
use super::state::AppState;

/// 本地模式下的制品静态托管配置
pub struct StaticAudioFiles {
    /// URL 挂载前缀，如 `/audio`
    pub mount_path: String,
    /// 本地存储根目录
    pub root: PathBuf,
}

/// 创建所有路由
///
/// 三个 API 路由全部位于凭证校验中间件之后；静态制品托管
/// （仅本地模式）不挂中间件。
pub fn create_routes(state: Arc<AppState>, static_audio: Option<StaticAudioFiles>) -> Router {
    let mut router = Router::new()
        .route("/convert", post(handlers::convert))
        .route("/voices", get(handlers::list_voices))
        .route("/health", get(handlers::health_check))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    if let Some(static_audio) = static_audio {
        router = router.nest_service(
            &static_audio.mount_path,
            ServeDir::new(static_audio.root),
        );
    }

    router.with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tempfile::{tempdir, TempDir};
    use tower::util::ServiceExt;

    use crate::domain::VoiceCatalog;
    use crate::infrastructure::adapters::{FakeTtsClient, LocalArtifactStore};

    const SECRET: &str = "test-secret";

    async fn test_app(synth: Arc<FakeTtsClient>, dir: &TempDir) -> Router {
        let store = Arc::new(
            LocalArtifactStore::new(dir.path(), "/audio").await.unwrap(),
        );
        let state = Arc::new(AppState::new(
            synth,
            store,
            VoiceCatalog::with_defaults(),
            SECRET,
        ));
        create_routes(
            state,
            Some(StaticAudioFiles {
                mount_path: "/audio".to_string(),
                root: dir.path().to_path_buf(),
            }),
        )
    }

    fn convert_request(auth: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/convert")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(auth) = auth {
            builder = builder.header(header::AUTHORIZATION, auth);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get_request(uri: &str, auth: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(auth) = auth {
            builder = builder.header(header::AUTHORIZATION, auth);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn valid_body() -> Value {
        json!({"text": "Hello world", "voice": "echo", "ownerId": "user1"})
    }

    #[tokio::test]
    async fn test_missing_credential_rejects_all_protected_routes() {
        let dir = tempdir().unwrap();
        let synth = Arc::new(FakeTtsClient::returning(b"wav".to_vec()));
        let app = test_app(synth.clone(), &dir).await;

        let response = app
            .clone()
            .oneshot(convert_request(None, valid_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        for uri in ["/voices", "/health"] {
            let response = app.clone().oneshot(get_request(uri, None)).await.unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }

        // 无任何副作用：未触达合成器，也未写入任何文件
        assert_eq!(synth.call_count(), 0);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_credential_rejected() {
        let dir = tempdir().unwrap();
        let synth = Arc::new(FakeTtsClient::returning(b"wav".to_vec()));
        let app = test_app(synth.clone(), &dir).await;

        let response = app
            .oneshot(convert_request(Some("Bearer wrong-key"), valid_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(synth.call_count(), 0);
    }

    #[tokio::test]
    async fn test_credential_accepted_without_bearer_prefix() {
        let dir = tempdir().unwrap();
        let synth = Arc::new(FakeTtsClient::returning(b"wav".to_vec()));
        let app = test_app(synth, &dir).await;

        let response = app
            .oneshot(get_request("/voices", Some(SECRET)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_voices_returns_catalog_in_order() {
        let dir = tempdir().unwrap();
        let synth = Arc::new(FakeTtsClient::returning(b"wav".to_vec()));
        let app = test_app(synth, &dir).await;

        let response = app
            .oneshot(get_request("/voices", Some("Bearer test-secret")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(
            body["voices"],
            json!(["echo", "alloy", "fable", "onyx", "nova", "shimmer"])
        );
    }

    #[tokio::test]
    async fn test_health_reports_healthy_when_configured() {
        let dir = tempdir().unwrap();
        let synth = Arc::new(FakeTtsClient::returning(b"wav".to_vec()));
        let app = test_app(synth, &dir).await;

        let response = app
            .oneshot(get_request("/health", Some("Bearer test-secret")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["ttsService"], "configured");
    }

    #[tokio::test]
    async fn test_health_reports_unhealthy_when_unconfigured() {
        let dir = tempdir().unwrap();
        let synth = Arc::new(FakeTtsClient::unconfigured());
        let app = test_app(synth, &dir).await;

        let response = app
            .oneshot(get_request("/health", Some("Bearer test-secret")))
            .await
            .unwrap();
        // 凭证通过后健康检查本身不返回非 200
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "unhealthy");
        assert_eq!(body["ttsService"], "api_key_missing");
    }

    #[tokio::test]
    async fn test_health_reports_unreachable_when_configured_but_failing() {
        let dir = tempdir().unwrap();
        // 已配置但提供方不可达
        let synth = Arc::new(FakeTtsClient::failing());
        let app = test_app(synth, &dir).await;

        let response = app
            .oneshot(get_request("/health", Some("Bearer test-secret")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "unhealthy");
        assert_eq!(body["ttsService"], "configured_but_unreachable");
    }

    #[tokio::test]
    async fn test_convert_happy_path_persists_exact_bytes() {
        let dir = tempdir().unwrap();
        let synth = Arc::new(FakeTtsClient::returning(b"mock_audio_data".to_vec()));
        let app = test_app(synth.clone(), &dir).await;

        let response = app
            .clone()
            .oneshot(convert_request(Some("Bearer test-secret"), valid_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let audio_url = body["audioUrl"].as_str().unwrap();
        assert!(audio_url.starts_with("/audio/user1/"));
        assert!(audio_url.ends_with(".wav"));
        assert_eq!(synth.call_count(), 1);

        let internal_ref = body["internalReference"].as_str().unwrap();
        assert_eq!(std::fs::read(internal_ref).unwrap(), b"mock_audio_data");

        // 制品可通过静态托管无凭证读取
        let response = app.oneshot(get_request(audio_url, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"mock_audio_data");
    }

    #[tokio::test]
    async fn test_convert_unsupported_voice_is_400_before_synthesis() {
        let dir = tempdir().unwrap();
        let synth = Arc::new(FakeTtsClient::returning(b"wav".to_vec()));
        let app = test_app(synth.clone(), &dir).await;

        let body = json!({"text": "Hello", "voice": "robot", "ownerId": "user1"});
        let response = app
            .oneshot(convert_request(Some("Bearer test-secret"), body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(synth.call_count(), 0);

        let body = json_body(response).await;
        assert!(body["detail"].as_str().unwrap().contains("not supported"));
    }

    #[tokio::test]
    async fn test_convert_missing_owner_is_400_in_local_mode() {
        let dir = tempdir().unwrap();
        let synth = Arc::new(FakeTtsClient::returning(b"wav".to_vec()));
        let app = test_app(synth.clone(), &dir).await;

        let body = json!({"text": "Hello", "voice": "echo"});
        let response = app
            .oneshot(convert_request(Some("Bearer test-secret"), body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(synth.call_count(), 0);
    }

    #[tokio::test]
    async fn test_convert_synthesis_failure_is_500_with_detail() {
        let dir = tempdir().unwrap();
        let synth = Arc::new(FakeTtsClient::failing());
        let app = test_app(synth, &dir).await;

        let response = app
            .oneshot(convert_request(Some("Bearer test-secret"), valid_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = json_body(response).await;
        assert!(!body["detail"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_convert_unconfigured_provider_is_500() {
        let dir = tempdir().unwrap();
        let synth = Arc::new(FakeTtsClient::unconfigured());
        let app = test_app(synth, &dir).await;

        let response = app
            .oneshot(convert_request(Some("Bearer test-secret"), valid_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = json_body(response).await;
        assert!(body["detail"].as_str().unwrap().contains("not configured"));
    }

    #[tokio::test]
    async fn test_concurrent_conversions_same_owner_distinct_files() {
        let dir = tempdir().unwrap();
        let synth = Arc::new(FakeTtsClient::returning(b"wav".to_vec()));
        let app = test_app(synth, &dir).await;

        let (a, b) = tokio::join!(
            app.clone()
                .oneshot(convert_request(Some("Bearer test-secret"), valid_body())),
            app.clone()
                .oneshot(convert_request(Some("Bearer test-secret"), valid_body())),
        );
        let (a, b) = (a.unwrap(), b.unwrap());
        assert_eq!(a.status(), StatusCode::OK);
        assert_eq!(b.status(), StatusCode::OK);

        let a = json_body(a).await;
        let b = json_body(b).await;
        assert_ne!(a["audioUrl"], b["audioUrl"]);
        assert_ne!(a["internalReference"], b["internalReference"]);
        assert!(std::path::Path::new(a["internalReference"].as_str().unwrap()).exists());
        assert!(std::path::Path::new(b["internalReference"].as_str().unwrap()).exists());
    }
}
