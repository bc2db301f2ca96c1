//!
//! 集成测试的通用辅助函数：装载固定密钥材料、验证外层签名、解密内层载荷。
//!

#![allow(dead_code)]

use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{Aes128Gcm, Nonce, Tag};
use base64::{Engine, engine::general_purpose};
use cdata_kit::prelude::*;
use cdata_kit::token::header::JwsHeader;
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::signature::Verifier;
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;

pub const PLATFORM_CERT_PEM: &str = include_str!("data/platform_cert.pem");
pub const PLATFORM_PUBLIC_PEM: &str = include_str!("data/platform_public.pem");
pub const PLATFORM_PRIVATE_PKCS8_PEM: &str = include_str!("data/platform_private_pkcs8.pem");
pub const PARTNER_CERT_PEM: &str = include_str!("data/partner_cert.pem");
pub const PARTNER_PUBLIC_PEM: &str = include_str!("data/partner_public.pem");
pub const PARTNER_PRIVATE_PKCS8_PEM: &str = include_str!("data/partner_private_pkcs8.pem");
pub const PARTNER_PRIVATE_PKCS1_PEM: &str = include_str!("data/partner_private_pkcs1.pem");

pub const PARTNER_ID: &str = "4059557693262156416";

pub fn b64url_decode(segment: &str) -> Vec<u8> {
    general_purpose::URL_SAFE_NO_PAD
        .decode(segment)
        .expect("segment is not valid base64url")
}

/// 验证外层 RS256 签名并返回（头, 载荷字节）。
pub fn verify_outer(
    token: &str,
    signer_public: &RsaPublicKeyMaterial,
) -> Result<(JwsHeader, Vec<u8>), String> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(format!("expected 3 segments, got {}", segments.len()));
    }

    let public_key =
        RsaPublicKey::from_public_key_der(signer_public.as_bytes()).map_err(|e| e.to_string())?;
    let verifying_key = VerifyingKey::<Sha256>::new(public_key);

    let signature_bytes = b64url_decode(segments[2]);
    let signature =
        Signature::try_from(signature_bytes.as_slice()).map_err(|e| e.to_string())?;
    let signing_input = format!("{}.{}", segments[0], segments[1]);
    verifying_key
        .verify(signing_input.as_bytes(), &signature)
        .map_err(|e| e.to_string())?;

    let header: JwsHeader =
        serde_json::from_slice(&b64url_decode(segments[0])).map_err(|e| e.to_string())?;
    Ok((header, b64url_decode(segments[1])))
}

/// 解密内层 5 段紧凑密文，返回原始明文字节。
pub fn decrypt_inner(
    jwe_compact: &str,
    recipient_private: &RsaPrivateKeyMaterial,
) -> Result<Vec<u8>, String> {
    let segments: Vec<&str> = jwe_compact.split('.').collect();
    if segments.len() != 5 {
        return Err(format!("expected 5 segments, got {}", segments.len()));
    }

    let private_key = RsaPrivateKey::from_pkcs8_der(recipient_private.as_bytes())
        .map_err(|e| e.to_string())?;
    let cek = private_key
        .decrypt(Pkcs1v15Encrypt, &b64url_decode(segments[1]))
        .map_err(|e| e.to_string())?;

    let cipher = Aes128Gcm::new_from_slice(&cek).map_err(|e| e.to_string())?;
    let iv = b64url_decode(segments[2]);
    let mut buffer = b64url_decode(segments[3]);
    let tag = b64url_decode(segments[4]);

    cipher
        .decrypt_in_place_detached(
            Nonce::from_slice(&iv),
            segments[0].as_bytes(),
            &mut buffer,
            Tag::from_slice(&tag),
        )
        .map_err(|e| e.to_string())?;

    Ok(buffer)
}
