//!
//! # 签发配置模块
//!
//! 外层签名头中的 `ver` 与 `certificateId` 在参考协议中是固定字面量，
//! 这里作为配置项处理：无协商逻辑，仅允许部署时覆盖。
//!
use serde::{Deserialize, Serialize};

/// 默认格式版本号（`ver` 声明）。
pub const DEFAULT_FORMAT_VERSION: &str = "3";

/// 默认证书标识（`certificateId` 声明），由接收平台分发。
pub const DEFAULT_CERTIFICATE_ID: &str = "YMtt";

/// 令牌签发配置
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct IssuerConfig {
    /// 写入外层签名头的格式版本号
    #[serde(default = "default_format_version")]
    pub format_version: String,
    /// 写入外层签名头的证书标识
    #[serde(default = "default_certificate_id")]
    pub certificate_id: String,
}

fn default_format_version() -> String {
    DEFAULT_FORMAT_VERSION.to_string()
}

fn default_certificate_id() -> String {
    DEFAULT_CERTIFICATE_ID.to_string()
}

impl Default for IssuerConfig {
    fn default() -> Self {
        Self {
            format_version: default_format_version(),
            certificate_id: default_certificate_id(),
        }
    }
}
