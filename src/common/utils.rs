use base64::{Engine, engine::general_purpose};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// 自动清零的字节向量，用于私钥等敏感数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct ZeroizingVec(#[serde(with = "serde_bytes")] pub Vec<u8>);

impl std::ops::Deref for ZeroizingVec {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for ZeroizingVec {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// 将字节编码为紧凑序列化使用的 base64url 段（无填充）。
pub fn b64url_encode(data: impl AsRef<[u8]>) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_b64url_encode_has_no_padding_or_url_unsafe_chars() {
        // 0xfb 0xff 的标准 base64 是 "+/8="，url-safe 无填充应为 "-_8"
        let encoded = b64url_encode([0xfbu8, 0xff]);
        assert_eq!(encoded, "-_8");
        assert!(!encoded.contains('='));
    }

    #[test]
    fn test_b64url_encode_empty() {
        assert_eq!(b64url_encode([]), "");
    }

    #[test]
    fn test_zeroizing_vec_deref() {
        let v = ZeroizingVec(vec![1, 2, 3]);
        assert_eq!(&*v, &[1, 2, 3]);
        assert_eq!(v.as_ref(), &[1, 2, 3]);
    }
}
