//! 密钥材料解析：把合作方提供的 PEM / 裸 base64 文本变成可用的 RSA 密钥。

pub mod errors;
pub mod material;
pub(crate) mod pkcs1;
