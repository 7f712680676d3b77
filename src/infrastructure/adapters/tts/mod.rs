//! TTS Adapters - 合成端口实现

mod fake_tts_client;
mod http_tts_client;

pub use fake_tts_client::FakeTtsClient;
pub use http_tts_client::{HttpTtsClient, HttpTtsClientConfig};
