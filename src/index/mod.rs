//! 索引模块：favicon 哈希索引、主动探测路径、全局注册表
pub mod builder;
pub mod global;

// 导出核心接口
pub use self::builder::{FingerprintIndex, FingerprintIndexBuilder};
pub use self::global::{
    finger_detect, global_registry, init_registry, init_registry_with_templates, Registry,
};
