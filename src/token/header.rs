//! 紧凑序列化所用的受保护头定义。

use serde::{Deserialize, Serialize};

/// 内层加密头声明的密钥加密算法（RSA PKCS#1 v1.5 密钥封装）
pub const JWE_ALGORITHM: &str = "RSA1_5";
/// 内层加密头声明的内容加密算法（AES-128-GCM）
pub const JWE_ENCRYPTION: &str = "A128GCM";
/// 外层签名头声明的签名算法（RSA PKCS#1 v1.5 + SHA-256）
pub const JWS_ALGORITHM: &str = "RS256";
/// 外层签名头的内容类型声明
pub const CONTENT_TYPE_CARD: &str = "CARD";

/// 内层（加密层）受保护头
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JweHeader {
    pub alg: String,
    pub enc: String,
}

impl JweHeader {
    /// RSA1_5 + A128GCM 组合，本系统唯一使用的加密头。
    pub fn rsa1_5_a128gcm() -> Self {
        Self {
            alg: JWE_ALGORITHM.to_string(),
            enc: JWE_ENCRYPTION.to_string(),
        }
    }
}

/// 外层（签名层）受保护头。
///
/// 声明名大小写敏感；字段声明顺序即序列化顺序，保证逐次调用
/// 产生可复现的头部编码（声明语义上仍按映射比较，与顺序无关）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JwsHeader {
    pub alg: String,
    pub cty: String,
    #[serde(rename = "partnerId")]
    pub partner_id: String,
    pub ver: String,
    #[serde(rename = "certificateId")]
    pub certificate_id: String,
    /// 签发时刻的 epoch 毫秒
    pub utc: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwe_header_serializes_fixed_pair() {
        let header = JweHeader::rsa1_5_a128gcm();
        let json = serde_json::to_value(&header).unwrap();
        assert_eq!(json["alg"], "RSA1_5");
        assert_eq!(json["enc"], "A128GCM");
    }

    #[test]
    fn test_jws_header_claim_names_are_case_sensitive() {
        let header = JwsHeader {
            alg: JWS_ALGORITHM.to_string(),
            cty: CONTENT_TYPE_CARD.to_string(),
            partner_id: "1234".to_string(),
            ver: "3".to_string(),
            certificate_id: "YMtt".to_string(),
            utc: 1_700_000_000_000,
        };
        let json = serde_json::to_value(&header).unwrap();
        let object = json.as_object().unwrap();

        // 映射语义：固定的声明名集合，每个名字唯一
        assert_eq!(object.len(), 6);
        assert!(object.contains_key("partnerId"));
        assert!(object.contains_key("certificateId"));
        assert!(object.contains_key("ver"));
        assert!(object.contains_key("utc"));
        assert!(!object.contains_key("partnerid"));
    }

    #[test]
    fn test_jws_header_roundtrip() {
        let header = JwsHeader {
            alg: JWS_ALGORITHM.to_string(),
            cty: CONTENT_TYPE_CARD.to_string(),
            partner_id: "4059557693262156416".to_string(),
            ver: "3".to_string(),
            certificate_id: "YMtt".to_string(),
            utc: 1_700_000_000_123,
        };
        let json = serde_json::to_string(&header).unwrap();
        let parsed: JwsHeader = serde_json::from_str(&json).unwrap();
        assert_eq!(header, parsed);
    }
}
