//! HTTP Handlers

mod convert;
mod health;
mod voices;

pub use convert::convert;
pub use health::health_check;
pub use voices::list_voices;
