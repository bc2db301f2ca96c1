//! 令牌构造：机密层（加密）与真实性层（签名）的两段式流水线。

pub mod errors;
pub mod header;
pub mod issuer;
pub(crate) mod jwe;
pub mod jws;
