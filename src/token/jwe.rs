//! 机密层：RSA1_5 密钥封装 + AES-128-GCM 内容加密，输出 5 段紧凑序列化。
//!
//! 一次性内容加密密钥（CEK）由 RSA PKCS#1 v1.5 封装给接收方公钥，
//! 载荷本体由 CEK 以 AES-128-GCM 加密，受保护头的 base64url 编码
//! 作为附加认证数据参与运算（RFC 7516 紧凑规则）。

use crate::common::utils::b64url_encode;
use crate::keys::material::RsaPublicKeyMaterial;
use crate::token::errors::TokenError;
use crate::token::header::JweHeader;
use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{AeadCore, Aes128Gcm};
use rsa::pkcs8::DecodePublicKey;
use rsa::rand_core::OsRng as RsaOsRng;
use rsa::{Pkcs1v15Encrypt, RsaPublicKey};
use zeroize::Zeroizing;

/// A128GCM 的内容加密密钥长度
const CEK_SIZE: usize = 16;

/// 为接收方公钥加密明文，返回紧凑序列化
/// `header.encKey.iv.ciphertext.tag`（各段 base64url 无填充）。
pub(crate) fn encrypt_compact(
    recipient: &RsaPublicKeyMaterial,
    plaintext: &[u8],
) -> Result<String, TokenError> {
    let header = JweHeader::rsa1_5_a128gcm();
    let header_json = serde_json::to_vec(&header)
        .map_err(|e| TokenError::Encryption(format!("Header serialization failed: {}", e)))?;
    let protected = b64url_encode(&header_json);

    // 一次性 CEK，离开作用域即清零
    let mut cek = Zeroizing::new(vec![0u8; CEK_SIZE]);
    {
        use rand_core::{OsRng, TryRngCore};
        OsRng
            .try_fill_bytes(cek.as_mut_slice())
            .map_err(|e| TokenError::Encryption(format!("CEK generation failed: {}", e)))?;
    }

    // 从DER数据恢复公钥
    let public_key = RsaPublicKey::from_public_key_der(recipient.as_bytes())
        .map_err(|e| TokenError::Encryption(format!("解析接收方 RSA 公钥失败: {}", e)))?;

    let mut rsa_rng = RsaOsRng;
    let encrypted_key = public_key
        .encrypt(&mut rsa_rng, Pkcs1v15Encrypt, cek.as_slice())
        .map_err(|e| TokenError::Encryption(format!("RSA 密钥封装失败: {}", e)))?;

    let cipher = Aes128Gcm::new_from_slice(cek.as_slice())
        .map_err(|e| TokenError::Encryption(format!("AES-128-GCM init failed: {}", e)))?;

    let nonce = {
        use aes_gcm::aead::OsRng;
        Aes128Gcm::generate_nonce(&mut OsRng)
    };

    // AAD 为受保护头 base64url 编码的 ASCII 字节
    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(&nonce, protected.as_bytes(), &mut buffer)
        .map_err(|e| TokenError::Encryption(format!("AES-128-GCM encryption failed: {}", e)))?;

    Ok([
        protected,
        b64url_encode(&encrypted_key),
        b64url_encode(nonce),
        b64url_encode(&buffer),
        b64url_encode(tag),
    ]
    .join("."))
}
