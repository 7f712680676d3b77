//! Credential Verifier - Bearer 凭证校验
//!
//! 纯函数实现，无状态、无副作用。中间件在所有受保护路由
//! 的其它处理之前调用。

use subtle::ConstantTimeEq;
use thiserror::Error;

/// 凭证校验错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("API key is missing")]
    MissingCredential,

    #[error("Invalid API key")]
    InvalidCredential,
}

/// 常量时间比较两个凭证字符串
fn secret_matches(token: &str, secret: &str) -> bool {
    bool::from(token.as_bytes().ct_eq(secret.as_bytes()))
}

/// 校验 Authorization 头中的 bearer 凭证
///
/// 接受带或不带 `Bearer ` 前缀的头值；剥离前缀后与配置的
/// 密钥做精确比较。
///
/// # 返回
/// - `Ok(token)` - 校验通过的凭证
/// - `Err(AuthError::MissingCredential)` - 无 Authorization 头
/// - `Err(AuthError::InvalidCredential)` - 凭证不匹配
pub fn verify_bearer(header: Option<&str>, secret: &str) -> Result<String, AuthError> {
    let header = header.ok_or(AuthError::MissingCredential)?;

    let token = header.strip_prefix("Bearer ").unwrap_or(header);

    if secret_matches(token, secret) {
        Ok(token.to_string())
    } else {
        Err(AuthError::InvalidCredential)
    }
}
