//! 通用模块：配置、错误聚合与基础工具。

pub mod config;
pub mod errors;
pub mod utils;
