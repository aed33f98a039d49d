//! 全局错误类型定义

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;

#[derive(Error, Debug)]
pub enum RsprayError {
    // 模板相关错误
    #[error("Template load failed: {0}")]
    RuleLoadError(String),
    #[error("Template parse failed: {0}")]
    RuleParseError(String),
    #[error("Finger compile failed: {0}")]
    RuleCompileError(String),

    // 编译相关错误
    #[error("Regex compilation failed: {0}")]
    RegexCompileError(#[from] RegexError),

    // 索引相关错误
    #[error("Fingerprint registry not initialized")]
    RegistryNotInitialized,

    // 序列化/反序列化错误
    #[error("JSON parse failed: {0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type RspResult<T> = Result<T, RsprayError>;
