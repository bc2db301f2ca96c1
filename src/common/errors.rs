use crate::keys::errors::KeyError;
use crate::token::errors::TokenError;
use thiserror::Error;

/// 签发流程可能遇到的错误类型。
///
/// 每个领域模块（密钥解析、令牌构造）维护自己的错误枚举，
/// 此处统一聚合，方便调用方在一条流水线上使用 `?` 传播。
#[derive(Error, Debug)]
pub enum Error {
    #[error("Key material error")]
    Key(#[from] KeyError),

    #[error("Token construction error")]
    Token(#[from] TokenError),

    #[error("Serialization error (JSON)")]
    Json(#[from] serde_json::Error),

    #[error("Invalid data format: {0}")]
    Format(String),
}

// 手动实现一些无法使用 #[from] 的转换
impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Format(format!("UTF-8 conversion error: {}", err))
    }
}
