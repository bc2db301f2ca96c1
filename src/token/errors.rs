use thiserror::Error;

/// 令牌构造的独立错误类型。
///
/// 按失败的层次区分：机密层（加密）与真实性层（签名）。
/// 任一层失败都终止当前调用，绝不返回部分构造的令牌。
#[derive(Error, Debug)]
pub enum TokenError {
    /// 机密层失败：密钥封装、内容加密或其前置步骤出错
    #[error("Encryption layer failed: {0}")]
    Encryption(String),

    /// 真实性层失败：签名者材料无效或签名运算出错
    #[error("Signing layer failed: {0}")]
    Signing(String),
}
