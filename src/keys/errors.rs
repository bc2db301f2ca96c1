use thiserror::Error;

/// 密钥材料解析的独立错误类型
#[derive(Error, Debug)]
pub enum KeyError {
    /// PEM 外壳或 base64 正文无法解码
    #[error("Malformed key text: {0}")]
    MalformedKeyText(String),

    /// 字节内容不是结构上有效的 PKCS#8 / SubjectPublicKeyInfo（含 PKCS#1 重包装失败）
    #[error("Invalid key encoding: {0}")]
    InvalidKeyEncoding(String),

    /// 证书解析失败，或证书内没有可用的 RSA 公钥
    #[error("Invalid certificate: {0}")]
    InvalidCertificate(String),
}
