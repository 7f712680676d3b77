//! HTTP Layer - 服务门面
//!
//! 路由、状态码翻译与凭证校验中间件

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::{create_routes, StaticAudioFiles};
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
