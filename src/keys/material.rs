//! 多格式 RSA 密钥材料装载器。
//!
//! 输入既可能是带装甲的 PEM 文本，也可能是不带装甲的裸 base64。
//! 私钥支持 PKCS#8 与传统 PKCS#1（按装甲标签自动重包装），公钥支持
//! SubjectPublicKeyInfo 与 PKCS#1 公钥，亦可从 X.509 证书中提取。
//! 装载结果是持有 DER 字节的包装类型，真正的解析在使用处进行；
//! 调用之间不缓存、不持有任何密钥材料。

use crate::common::utils::ZeroizingVec;
use crate::keys::errors::KeyError;
use crate::keys::pkcs1::pkcs1_to_pkcs8;
use base64::{Engine, engine::general_purpose};
use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};
use serde::{Deserialize, Serialize};
use x509_cert::Certificate;
use x509_cert::der::{Decode, Encode};

const PEM_BEGIN: &str = "-----BEGIN ";
const PEM_END: &str = "-----END";

const LABEL_PKCS1_PRIVATE: &str = "RSA PRIVATE KEY";
const LABEL_PKCS1_PUBLIC: &str = "RSA PUBLIC KEY";
const LABEL_CERTIFICATE: &str = "CERTIFICATE";

/// RSA 公钥包装器（DER 编码的 SubjectPublicKeyInfo），提供序列化支持
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsaPublicKeyMaterial(pub Vec<u8>);

impl RsaPublicKeyMaterial {
    /// 获取内部DER编码的公钥数据
    pub fn inner_data(&self) -> &[u8] {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// RSA 私钥包装器（DER 编码的 PKCS#8），提供序列化和安全擦除支持
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsaPrivateKeyMaterial(pub ZeroizingVec);

impl RsaPrivateKeyMaterial {
    /// 获取内部DER编码的私钥数据
    pub fn inner_data(&self) -> &[u8] {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// 把 PEM 或裸 base64 文本解码为原始密钥字节。
///
/// 检测到 `-----BEGIN` 装甲时剥掉外壳并解码正文；否则整段文本
/// （去除空白后）按 base64 解码。解码失败或结果为空都会返回
/// [`KeyError::MalformedKeyText`]，绝不静默返回空字节序列。
pub fn decode_key_text(text: &str) -> Result<Vec<u8>, KeyError> {
    decode_key_block(text).map(|(_, bytes)| bytes)
}

/// 解码并返回装甲标签（若有），供需要按标签分派的装载器使用。
fn decode_key_block(text: &str) -> Result<(Option<String>, Vec<u8>), KeyError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(KeyError::MalformedKeyText("输入文本为空".to_string()));
    }

    let (label, body) = if trimmed.starts_with(PEM_BEGIN) {
        let label = parse_begin_label(trimmed)?;
        // 收集第一个装甲块的正文；遇到 END 行即停止，忽略其后内容
        let mut body = String::new();
        for line in trimmed.lines().skip(1) {
            let line = line.trim();
            if line.starts_with(PEM_END) {
                break;
            }
            body.push_str(line);
        }
        (Some(label), body)
    } else {
        (None, trimmed.split_whitespace().collect::<String>())
    };

    let bytes = general_purpose::STANDARD
        .decode(body.as_bytes())
        .map_err(|e| KeyError::MalformedKeyText(format!("base64 解码失败: {}", e)))?;
    if bytes.is_empty() {
        return Err(KeyError::MalformedKeyText(
            "解码后的密钥内容为空".to_string(),
        ));
    }

    Ok((label, bytes))
}

fn parse_begin_label(text: &str) -> Result<String, KeyError> {
    let first_line = text.lines().next().unwrap_or_default().trim();
    let label = first_line
        .strip_prefix(PEM_BEGIN)
        .and_then(|rest| rest.strip_suffix("-----"))
        .ok_or_else(|| KeyError::MalformedKeyText("PEM 起始行格式不正确".to_string()))?;
    Ok(label.trim().to_string())
}

/// 装载 RSA 私钥（PKCS#8，或带 `RSA PRIVATE KEY` 装甲的 PKCS#1）。
///
/// PKCS#1 输入先经 [`pkcs1_to_pkcs8`] 重包装；随后统一按 PKCS#8 解析，
/// 并重新规范化编码后存入包装类型。
pub fn load_private_key(text: &str) -> Result<RsaPrivateKeyMaterial, KeyError> {
    let (label, bytes) = decode_key_block(text)?;

    let pkcs8_bytes = if label.as_deref() == Some(LABEL_PKCS1_PRIVATE) {
        pkcs1_to_pkcs8(&bytes)?
    } else {
        bytes
    };

    let private_key = RsaPrivateKey::from_pkcs8_der(&pkcs8_bytes)
        .map_err(|e| KeyError::InvalidKeyEncoding(format!("解析 PKCS#8 私钥失败: {}", e)))?;

    let private_der = private_key
        .to_pkcs8_der()
        .map_err(|e| KeyError::InvalidKeyEncoding(format!("导出 RSA 私钥 DER 失败: {}", e)))?;

    Ok(RsaPrivateKeyMaterial(ZeroizingVec(
        private_der.as_bytes().to_vec(),
    )))
}

/// 装载 RSA 公钥（SubjectPublicKeyInfo，或带 `RSA PUBLIC KEY` 装甲的 PKCS#1 公钥）。
pub fn load_public_key(text: &str) -> Result<RsaPublicKeyMaterial, KeyError> {
    let (label, bytes) = decode_key_block(text)?;

    let public_key = if label.as_deref() == Some(LABEL_PKCS1_PUBLIC) {
        RsaPublicKey::from_pkcs1_der(&bytes)
            .map_err(|e| KeyError::InvalidKeyEncoding(format!("解析 PKCS#1 公钥失败: {}", e)))?
    } else {
        RsaPublicKey::from_public_key_der(&bytes)
            .map_err(|e| KeyError::InvalidKeyEncoding(format!("解析 RSA 公钥失败: {}", e)))?
    };

    let public_der = public_key
        .to_public_key_der()
        .map_err(|e| KeyError::InvalidKeyEncoding(format!("导出 RSA 公钥 DER 失败: {}", e)))?;

    Ok(RsaPublicKeyMaterial(public_der.as_bytes().to_vec()))
}

/// 从 X.509 证书中提取 RSA 公钥。
///
/// 证书解析失败、公钥缺失或不是 RSA 公钥都会返回
/// [`KeyError::InvalidCertificate`]，绝不静默返回空值。
pub fn load_public_key_from_certificate(text: &str) -> Result<RsaPublicKeyMaterial, KeyError> {
    let bytes = decode_key_text(text)?;

    let certificate = Certificate::from_der(&bytes)
        .map_err(|e| KeyError::InvalidCertificate(format!("解析 X.509 证书失败: {}", e)))?;

    let spki_der = certificate
        .tbs_certificate
        .subject_public_key_info
        .to_der()
        .map_err(|e| KeyError::InvalidCertificate(format!("导出证书公钥失败: {}", e)))?;

    // 确认证书里确实是可用的 RSA 公钥
    RsaPublicKey::from_public_key_der(&spki_der)
        .map_err(|e| KeyError::InvalidCertificate(format!("证书中不含有效的 RSA 公钥: {}", e)))?;

    Ok(RsaPublicKeyMaterial(spki_der))
}

/// 按装甲标签自动分派的公钥装载器。
///
/// `CERTIFICATE` 走证书提取，其余（`PUBLIC KEY` / `RSA PUBLIC KEY` /
/// 裸 base64）走普通公钥解析。
pub fn load_any_public_key(text: &str) -> Result<RsaPublicKeyMaterial, KeyError> {
    let (label, _) = decode_key_block(text)?;
    match label.as_deref() {
        Some(LABEL_CERTIFICATE) => load_public_key_from_certificate(text),
        _ => load_public_key(text),
    }
}
