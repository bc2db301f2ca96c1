//! 真实性层：RSA PKCS#1 v1.5 + SHA-256（RS256）紧凑签名，输出 3 段序列化。

use crate::common::utils::b64url_encode;
use crate::keys::material::{RsaPrivateKeyMaterial, RsaPublicKeyMaterial};
use crate::token::errors::TokenError;
use crate::token::header::JwsHeader;
use rsa::pkcs1v15::SigningKey;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::signature::{SignatureEncoding, Signer};
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;

/// 签名者身份：公钥与私钥共同组装，二者缺一不可。
///
/// 公私钥是否真正配对由调用方负责；不配对的材料会签出无法通过
/// 外部验证的令牌，但本层不做配对校验。
#[derive(Debug, Clone)]
pub struct SignerKeyPair {
    public: RsaPublicKeyMaterial,
    private: RsaPrivateKeyMaterial,
}

impl SignerKeyPair {
    pub fn new(public: RsaPublicKeyMaterial, private: RsaPrivateKeyMaterial) -> Self {
        Self { public, private }
    }

    pub fn public_key(&self) -> &RsaPublicKeyMaterial {
        &self.public
    }

    pub fn private_key(&self) -> &RsaPrivateKeyMaterial {
        &self.private
    }
}

/// 对载荷做 RS256 紧凑签名，返回 `header.payload.signature`。
pub(crate) fn sign_compact(
    signer: &SignerKeyPair,
    header: &JwsHeader,
    payload: &[u8],
) -> Result<String, TokenError> {
    let header_json = serde_json::to_vec(header)
        .map_err(|e| TokenError::Signing(format!("Header serialization failed: {}", e)))?;

    let signing_input = format!(
        "{}.{}",
        b64url_encode(&header_json),
        b64url_encode(payload)
    );

    // 组装签名者身份：两份材料都必须结构有效
    RsaPublicKey::from_public_key_der(signer.public.as_bytes())
        .map_err(|e| TokenError::Signing(format!("解析签名方 RSA 公钥失败: {}", e)))?;
    let private_key = RsaPrivateKey::from_pkcs8_der(signer.private.as_bytes())
        .map_err(|e| TokenError::Signing(format!("解析签名方 RSA 私钥失败: {}", e)))?;

    let signing_key = SigningKey::<Sha256>::new(private_key);
    let signature = signing_key
        .try_sign(signing_input.as_bytes())
        .map_err(|e| TokenError::Signing(format!("RS256 签名失败: {}", e)))?;

    Ok(format!(
        "{}.{}",
        signing_input,
        b64url_encode(signature.to_vec())
    ))
}
