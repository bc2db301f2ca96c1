//! 令牌签发入口：先加密、后签名的两段式流水线。
//!
//! 每次调用都是独立的纯函数式流水线：不持有跨调用状态，不做重试
//! （密码学失败不是瞬态条件），调用返回后不保留任何密钥材料、明文
//! 或中间密文。并发调用无需任何协调。

use crate::common::config::IssuerConfig;
use crate::common::errors::Error;
use crate::keys::material::RsaPublicKeyMaterial;
use crate::token::header::{CONTENT_TYPE_CARD, JWS_ALGORITHM, JwsHeader};
use crate::token::jws::SignerKeyPair;
use crate::token::{jwe, jws};
use chrono::Utc;

/// CDATA 令牌签发器。
///
/// 无状态：仅携带签发配置（`ver` / `certificateId`），密钥材料与
/// 明文全部由调用方按次提供。
#[derive(Debug, Clone, Default)]
pub struct CdataIssuer {
    config: IssuerConfig,
}

impl CdataIssuer {
    /// 使用默认配置创建签发器。
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定配置创建签发器。
    pub fn with_config(config: IssuerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IssuerConfig {
        &self.config
    }

    /// 为一份卡片数据签发 CDATA 令牌。
    ///
    /// 第一步为接收方公钥加密明文（机密层）；加密完成后，第二步才
    /// 以签名者私钥对加密结果做 RS256 签名（真实性层）。签名包裹的
    /// 永远是加密后的紧凑串，绝不是明文。`utc` 声明取本次调用时刻
    /// 的墙钟毫秒，不缓存、不复用。
    pub fn issue(
        &self,
        partner_id: &str,
        recipient_public_key: &RsaPublicKeyMaterial,
        signer: &SignerKeyPair,
        plaintext: &str,
    ) -> Result<String, Error> {
        let encrypted = jwe::encrypt_compact(recipient_public_key, plaintext.as_bytes())?;

        let header = JwsHeader {
            alg: JWS_ALGORITHM.to_string(),
            cty: CONTENT_TYPE_CARD.to_string(),
            partner_id: partner_id.to_string(),
            ver: self.config.format_version.clone(),
            certificate_id: self.config.certificate_id.clone(),
            utc: Utc::now().timestamp_millis(),
        };

        let token = jws::sign_compact(signer, &header, encrypted.as_bytes())?;
        Ok(token)
    }
}
