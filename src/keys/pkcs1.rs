//! PKCS#1 → PKCS#8 结构重包装。
//!
//! 合作方生态中经常以传统 PKCS#1 形式分发 RSA 私钥；装载器在内部完成
//! 结构包装，使流水线的其余部分只处理 PKCS#8。长度字段由 DER 编码器
//! 通用计算（支持长形式编码），不做固定 2 字节大端的假设。

use crate::keys::errors::KeyError;
use rsa::pkcs1;
use rsa::pkcs8::der::Encode;
use rsa::pkcs8::der::asn1::AnyRef;
use rsa::pkcs8::{AlgorithmIdentifierRef, PrivateKeyInfo};

/// 把 PKCS#1 `RSAPrivateKey` 的 DER 字节包装为 PKCS#8 `PrivateKeyInfo`。
///
/// 包装只添加版本号、RSA 算法标识（1.2.840.113549.1.1.1，NULL 参数）
/// 与 OCTET STRING 外壳；PKCS#1 原始字节保持不变。
pub(crate) fn pkcs1_to_pkcs8(pkcs1_der: &[u8]) -> Result<Vec<u8>, KeyError> {
    let algorithm = AlgorithmIdentifierRef {
        oid: pkcs1::ALGORITHM_OID,
        parameters: Some(AnyRef::NULL),
    };
    PrivateKeyInfo::new(algorithm, pkcs1_der)
        .to_der()
        .map_err(|e| KeyError::InvalidKeyEncoding(format!("PKCS#1 重包装失败: {}", e)))
}
